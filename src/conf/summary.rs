use serde::{Deserialize, Serialize};

/// Where the summarizer looks for the event table and its identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SummaryConfig {
    #[serde(default = "SummaryConfig::default_table")]
    pub table: String,
    /// Direct identifier column.
    #[serde(default = "SummaryConfig::default_field")]
    pub field: String,
    /// Struct column holding the sync record.
    #[serde(default = "SummaryConfig::default_sync_column")]
    pub sync_column: String,
    /// Identifier child inside the sync record.
    #[serde(default = "SummaryConfig::default_sync_field")]
    pub sync_field: String,
}

impl SummaryConfig {
    fn default_table() -> String {
        String::from("T")
    }

    fn default_field() -> String {
        String::from("eventnumber")
    }

    fn default_sync_column() -> String {
        String::from("DST#Sync")
    }

    fn default_sync_field() -> String {
        String::from("EventNumber")
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            table: Self::default_table(),
            field: Self::default_field(),
            sync_column: Self::default_sync_column(),
            sync_field: Self::default_sync_field(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_default() {
        let summary = SummaryConfig::default();
        assert_eq!(summary.table, "T");
        assert_eq!(summary.field, "eventnumber");
        assert_eq!(summary.sync_column, "DST#Sync");
        assert_eq!(summary.sync_field, "EventNumber");
    }
}
