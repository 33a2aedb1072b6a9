//! Event data files and the tables inside them.
//!
//! A data file is a Parquet file. Its footer key-value metadata names the
//! table it holds under [`TABLE_NAME_KEY`]; the table's rows are the file's
//! rows and its fields are the top-level columns.

mod field;
mod file;
mod table;

pub use field::EventField;
pub use file::DataFile;
pub use table::Table;

/// Footer metadata key carrying the table name.
pub const TABLE_NAME_KEY: &str = "table";
