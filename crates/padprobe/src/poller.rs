use std::io::{self, BufRead, Write};

use padprobe_gamepad::{open_first_controller, Backend, ControllerInfo, Sample};
use thiserror::Error;

use crate::{print_debug, print_info};

#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Gamepad(#[from] padprobe_gamepad::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Samples a single controller each time a line arrives on the input.
pub struct Poller<B: Backend> {
    backend: B,
    controller: B::Controller,
    info: ControllerInfo,
}

impl<B: Backend> Poller<B> {
    /// Takes ownership of `backend` and opens its first game controller.
    pub fn open(backend: B) -> Result<Self, PollError> {
        let (info, controller) = open_first_controller(&backend)?;
        print_info!("using game controller #{}: {}", info.index, info.name);
        Ok(Self {
            backend,
            controller,
            info,
        })
    }

    /// Index and name of the controller chosen by [`Poller::open`].
    pub fn info(&self) -> &ControllerInfo {
        &self.info
    }

    /// Drains pending events so the backend refreshes its cached state,
    /// then reads the controller.
    pub fn sample(&mut self) -> Sample {
        self.backend.drain_events();
        Sample::read(&self.controller)
    }

    /// Writes one sample line to `output` per line read from `input`.
    ///
    /// Line content is ignored. The loop runs until the process is killed,
    /// or returns `Ok(())` once `input` reaches end of file. A closed stdin
    /// therefore ends the process with status 0 instead of sampling forever.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), PollError> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                print_debug!("end of input");
                return Ok(());
            }
            let sample = self.sample();
            writeln!(output, "{sample}")?;
            output.flush()?;
        }
    }
}
