use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::kv::{ToValue, Value};

use crate::summary::Variant;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the report here instead of the command's default sink. `-` is stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Resolve the file reference through the search path before opening.
    #[arg(short, long)]
    pub locate: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Command {
    /// Entry count and first/last `eventnumber`.
    Entries { file: String },
    /// Entry count and first/last event number from the sync record.
    EventNr { file: String },
    /// Sparse dump of the entry count and row scans.
    Numbers { file: String },
}

impl Command {
    pub fn file(&self) -> &str {
        match self {
            Command::Entries { file } | Command::EventNr { file } | Command::Numbers { file } => {
                file
            }
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Command::Entries { .. } => Variant::Entries,
            Command::EventNr { .. } => Variant::EntriesAndEventNr,
            Command::Numbers { .. } => Variant::Numbers,
        }
    }
}

#[derive(ValueEnum, Debug, PartialEq, Clone, Copy)]
pub enum Format {
    Text,
    Json,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}
