mod args;
mod crash;
mod error;
mod logger;

pub use args::{CliArgs, Command, Format};
pub use crash::{configure_crash_handling, install_crash_handler};
pub use error::EventSumError;
pub use logger::setup_logging;
