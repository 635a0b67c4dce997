pub mod cli;
pub mod logging;
pub mod poller;

pub use poller::{PollError, Poller};
