use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EventSumError {
    #[error("Cannot open file '{path}': {reason}")]
    OpenError { path: String, reason: String },
    #[error("Row {row} out of range for table '{table}' with {entries} entries")]
    OutOfRangeRow {
        table: String,
        row: u64,
        entries: u64,
    },
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Arrow error: {0}")]
    ArrowError(String),
    #[error("Parquet error: {0}")]
    ParquetError(String),
}

impl From<std::io::Error> for EventSumError {
    fn from(err: std::io::Error) -> Self {
        EventSumError::IoError(err.to_string())
    }
}

impl From<arrow::error::ArrowError> for EventSumError {
    fn from(err: arrow::error::ArrowError) -> Self {
        EventSumError::ArrowError(err.to_string())
    }
}

impl From<parquet::errors::ParquetError> for EventSumError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        EventSumError::ParquetError(err.to_string())
    }
}

impl From<serde_json::Error> for EventSumError {
    fn from(err: serde_json::Error) -> Self {
        EventSumError::IoError(err.to_string())
    }
}
