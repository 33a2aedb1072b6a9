//! Report renderings. Every renderer writes into the sink it is handed.

use std::io::Write;

use arrow::util::pretty::pretty_format_batches;
use serde::Serialize;

use crate::core::EventSumError;
use crate::summary::{Dump, NO_VALUE, Report};

pub fn header(w: &mut dyn Write, file: &str) -> Result<(), EventSumError> {
    writeln!(w, "Getting events for {file}")?;
    Ok(())
}

pub fn console(w: &mut dyn Write, report: &Report) -> Result<(), EventSumError> {
    writeln!(w, "Number of Entries: {}", report.entries)?;
    writeln!(w, "First event number: {}", report.first)?;
    writeln!(w, "Last event number: {}", report.last)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

/// One JSON object per line, same sentinels as the text report.
pub fn json(w: &mut dyn Write, file: &str, report: &Report) -> Result<(), EventSumError> {
    serde_json::to_writer(&mut *w, &JsonReport { file, report })?;
    writeln!(w)?;
    Ok(())
}

pub fn numbers(w: &mut dyn Write, dump: &Dump) -> Result<(), EventSumError> {
    let Some(entries) = dump.entries else {
        writeln!(w, " ***** {} is null, dummy values", dump.table)?;
        writeln!(w, "dummyEntries {NO_VALUE}")?;
        writeln!(w, "dummyFirst {NO_VALUE}")?;
        writeln!(w, "dummyLast {NO_VALUE}")?;
        return Ok(());
    };

    writeln!(w, "nEntries {entries}")?;
    for scan in [&dump.first, &dump.last].into_iter().flatten() {
        writeln!(w, "{}", pretty_format_batches(std::slice::from_ref(scan))?)?;
    }
    Ok(())
}
