use std::sync::Arc;

use arrow::array::{ArrayRef, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::debug;
use parquet::arrow::ProjectionMask;

use crate::core::EventSumError;

use super::{DataFile, EventField};

/// Named table inside an open [`DataFile`]. Borrows the file, so it cannot
/// outlive it.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    file: &'a DataFile,
    name: String,
}

impl<'a> Table<'a> {
    pub(super) fn new(file: &'a DataFile, name: &str) -> Self {
        Self {
            file,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> u64 {
        let rows = self.file.metadata().metadata().file_metadata().num_rows();
        u64::try_from(rows).unwrap_or(0)
    }

    /// Event identifier of `row`, `None` when the field is absent or null.
    pub fn read(&self, field: &EventField, row: u64) -> Result<Option<i64>, EventSumError> {
        match self.read_column(field.column(), row)? {
            Some(array) => field.extract(&array),
            None => {
                debug!("Table '{}' has no column '{}'", self.name, field.column());
                Ok(None)
            }
        }
    }

    /// One-row batch of `Row` and `column`, `None` when the column is absent.
    pub fn scan(&self, column: &str, row: u64) -> Result<Option<RecordBatch>, EventSumError> {
        let Some(array) = self.read_column(column, row)? else {
            return Ok(None);
        };
        let schema = Arc::new(Schema::new(vec![
            Field::new("Row", DataType::UInt64, false),
            Field::new(column, array.data_type().clone(), true),
        ]));
        let rows: ArrayRef = Arc::new(UInt64Array::from(vec![row]));
        Ok(Some(RecordBatch::try_new(schema, vec![rows, array])?))
    }

    fn read_column(&self, column: &str, row: u64) -> Result<Option<ArrayRef>, EventSumError> {
        let entries = self.entries();
        if row >= entries {
            return Err(EventSumError::OutOfRangeRow {
                table: self.name.clone(),
                row,
                entries,
            });
        }

        let metadata = self.file.metadata();
        let Ok(index) = metadata.schema().index_of(column) else {
            return Ok(None);
        };
        let mask = ProjectionMask::roots(metadata.parquet_schema(), [index]);
        let offset = usize::try_from(row).map_err(|_| EventSumError::OutOfRangeRow {
            table: self.name.clone(),
            row,
            entries,
        })?;

        let mut reader = self
            .file
            .reader()?
            .with_projection(mask)
            .with_offset(offset)
            .with_limit(1)
            .with_batch_size(1)
            .build()?;

        match reader.next() {
            Some(batch) => Ok(Some(batch?.column(0).clone())),
            None => Err(EventSumError::OutOfRangeRow {
                table: self.name.clone(),
                row,
                entries,
            }),
        }
    }
}
