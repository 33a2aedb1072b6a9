use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::conf::Config;
use crate::container::DataFile;
use crate::core::{CliArgs, Command, EventSumError, Format};
use crate::locate::Locator;
use crate::render;
use crate::summary::{Summarizer, Variant};

/// Sink the numbers dump goes to when no `--output` is given.
pub const NUMBERS_FILE: &str = "numbers.txt";

/// Where the report goes: `--output` if given (`-` is stdout), otherwise
/// stdout for console reports and [`NUMBERS_FILE`] for the dump.
pub fn sink_path(args: &CliArgs) -> Option<PathBuf> {
    match (&args.output, &args.command) {
        (Some(path), _) if path.as_os_str() == "-" => None,
        (Some(path), _) => Some(path.clone()),
        (None, Command::Numbers { .. }) => Some(PathBuf::from(NUMBERS_FILE)),
        (None, _) => None,
    }
}

pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>, EventSumError> {
    match path {
        Some(path) => {
            info!("Writing report to '{}'", path.display());
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Resolve, open and summarize one file. The sink is only created once the
/// data file is open, so a failed open leaves an earlier report in place.
pub fn execute<W: Write>(
    command: &Command,
    format: Format,
    config: &Config,
    locator: &dyn Locator,
    sink: impl FnOnce() -> Result<W, EventSumError>,
) -> Result<(), EventSumError> {
    let reference = command.file();
    let path = locator.locate(reference)?;
    let file = DataFile::open(&path)?;

    let variant = command.variant();
    let summarizer = Summarizer::for_variant(&config.summary, variant);
    let mut out = sink()?;

    match (variant, format) {
        (Variant::Numbers, Format::Text) => {
            render::numbers(&mut out, &summarizer.dump(&file)?)?;
        }
        (Variant::Numbers, Format::Json) => {
            warn!("The numbers dump has no JSON form, writing text");
            render::numbers(&mut out, &summarizer.dump(&file)?)?;
        }
        (_, Format::Text) => {
            render::header(&mut out, reference)?;
            let report = summarizer.summarize(&file)?.report(variant);
            render::console(&mut out, &report)?;
        }
        (_, Format::Json) => {
            let report = summarizer.summarize(&file)?.report(variant);
            render::json(&mut out, reference, &report)?;
        }
    }

    out.flush()?;
    Ok(())
}
