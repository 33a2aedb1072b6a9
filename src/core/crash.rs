use std::any::Any;
use std::panic::{self, Location};

use log::{debug, error};

use crate::conf::BatchConfig;

/// Install the crash handler when the batch config asks for it. Returns
/// whether it was installed.
pub fn configure_crash_handling(config: &BatchConfig) -> bool {
    if !config.quiet_crashes {
        debug!("Keeping the default panic output");
        return false;
    }
    install_crash_handler();
    true
}

/// Replace the default panic output with a single log line.
///
/// Batch jobs only need to see that the run died and where. Call once at
/// startup, after logging is set up.
pub fn install_crash_handler() {
    panic::set_hook(Box::new(|info| {
        error!("{}", crash_message(info.location(), info.payload()));
    }));
}

fn crash_message(location: Option<&Location<'_>>, payload: &(dyn Any + Send)) -> String {
    let location = location
        .map(|l| format!("{}:{}", l.file(), l.line()))
        .unwrap_or_else(|| String::from("unknown location"));
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("no message"));
    format!("eventsum crashed at {location}: {message}")
}
