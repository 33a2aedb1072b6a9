use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use eventsum::cli::{execute, open_sink, sink_path};
use eventsum::conf::Config;
use eventsum::core::{CliArgs, EventSumError, configure_crash_handling, setup_logging};
use eventsum::locate;
use log::{error, info};

fn run(args: &CliArgs) -> Result<(), EventSumError> {
    let config = Config::load(args.config.as_deref().map(Path::new))?;
    configure_crash_handling(&config.batch);

    let locator = locate::from_config(&config.locator, args.locate);
    let sink = sink_path(args);
    execute(&args.command, args.format, &config, locator.as_ref(), || {
        open_sink(sink.as_deref())
    })
}

fn main() -> ExitCode {
    setup_logging();
    let args = CliArgs::parse();
    info!(args = args; "eventsum started.");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
