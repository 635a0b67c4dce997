use std::io;
use std::process::ExitCode;

use clap::Parser;
use padprobe::cli::Cli;
use padprobe::{logging, print_error, PollError, Poller};
use padprobe_gamepad::SdlBackend;

fn run() -> Result<(), PollError> {
    let backend = SdlBackend::new()?;
    let mut poller = Poller::open(backend)?;
    poller.run(io::stdin().lock(), io::stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
