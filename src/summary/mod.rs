mod report;

use arrow::record_batch::RecordBatch;
use log::{debug, info};

use crate::conf::SummaryConfig;
use crate::container::{DataFile, EventField};
use crate::core::EventSumError;

pub use report::{NO_TABLE, NO_VALUE, Report, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Present(u64),
    Missing,
}

/// What a file says about its events, before sentinels are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub table: TableStatus,
    pub first: Option<i64>,
    pub last: Option<i64>,
}

impl Summary {
    pub fn missing_table() -> Self {
        Self {
            table: TableStatus::Missing,
            first: None,
            last: None,
        }
    }

    pub fn report(&self, variant: Variant) -> Report {
        let entries = match self.table {
            TableStatus::Present(n) => i64::try_from(n).unwrap_or(i64::MAX),
            TableStatus::Missing => variant.missing_table_entries(),
        };
        Report {
            entries,
            first: self.first.unwrap_or(NO_VALUE),
            last: self.last.unwrap_or(NO_VALUE),
        }
    }
}

/// Row scans backing the numbers dump. `entries` is `None` when the table is missing.
#[derive(Debug, Clone)]
pub struct Dump {
    pub table: String,
    pub entries: Option<u64>,
    pub first: Option<RecordBatch>,
    pub last: Option<RecordBatch>,
}

pub struct Summarizer {
    table: String,
    field: EventField,
}

impl Summarizer {
    pub fn new(table: impl Into<String>, field: EventField) -> Self {
        Self {
            table: table.into(),
            field,
        }
    }

    pub fn for_variant(config: &SummaryConfig, variant: Variant) -> Self {
        Self::new(config.table.clone(), variant.field(config))
    }

    pub fn summarize(&self, file: &DataFile) -> Result<Summary, EventSumError> {
        let Some(table) = file.table(&self.table) else {
            info!(
                "No table '{}' in '{}' (declares {:?})",
                self.table,
                file.path().display(),
                file.table_name()
            );
            return Ok(Summary::missing_table());
        };

        let entries = table.entries();
        if entries == 0 {
            debug!("Table '{}' is empty, no rows to read", self.table);
            return Ok(Summary {
                table: TableStatus::Present(0),
                first: None,
                last: None,
            });
        }

        let first = table.read(&self.field, 0)?;
        let last = table.read(&self.field, entries - 1)?;
        debug!(
            "Table '{}': {} entries, {:?} first, {:?} last",
            self.table, entries, first, last
        );

        Ok(Summary {
            table: TableStatus::Present(entries),
            first,
            last,
        })
    }

    /// Scans of the identifier column at the first and last rows.
    pub fn dump(&self, file: &DataFile) -> Result<Dump, EventSumError> {
        let Some(table) = file.table(&self.table) else {
            return Ok(Dump {
                table: self.table.clone(),
                entries: None,
                first: None,
                last: None,
            });
        };

        let entries = table.entries();
        let column = self.field.column();
        let (first, last) = if entries == 0 {
            (None, None)
        } else {
            (table.scan(column, 0)?, table.scan(column, entries - 1)?)
        };

        Ok(Dump {
            table: self.table.clone(),
            entries: Some(entries),
            first,
            last,
        })
    }
}
