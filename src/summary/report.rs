use serde::Serialize;

use crate::conf::SummaryConfig;
use crate::container::EventField;

/// Sentinel for a value that could not be read.
pub const NO_VALUE: i64 = -1;
/// Entry count reported by [`Variant::EntriesAndEventNr`] when the table is missing.
pub const NO_TABLE: i64 = -2;

/// Which report a run produces. Fixed per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Direct identifier column, missing table counts as [`NO_VALUE`].
    Entries,
    /// Identifier from the sync record, missing table counts as [`NO_TABLE`].
    EntriesAndEventNr,
    /// Sparse dump of the direct identifier column.
    Numbers,
}

impl Variant {
    pub fn missing_table_entries(self) -> i64 {
        match self {
            Variant::EntriesAndEventNr => NO_TABLE,
            Variant::Entries | Variant::Numbers => NO_VALUE,
        }
    }

    pub fn field(self, config: &SummaryConfig) -> EventField {
        match self {
            Variant::EntriesAndEventNr => {
                EventField::sync(config.sync_column.clone(), config.sync_field.clone())
            }
            Variant::Entries | Variant::Numbers => EventField::direct(config.field.clone()),
        }
    }
}

/// Summary flattened to the three printed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: i64,
    pub first: i64,
    pub last: i64,
}
