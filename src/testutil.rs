//! Test fixture writers.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::*;
use arrow::buffer::NullBuffer;
use arrow::datatypes::{DataType, Field, Fields, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::metadata::KeyValue;
use parquet::file::properties::WriterProperties;

use crate::container::TABLE_NAME_KEY;
use crate::core::EventSumError;

/// Run number stamped on every fixture row.
pub const FIXTURE_RUN: i32 = 53877;

/// Write `batch` as a Parquet file declaring `table` in its footer.
/// `None` writes a file that declares no table.
pub fn write_table_file(
    path: &Path,
    table: Option<&str>,
    batch: &RecordBatch,
) -> Result<(), EventSumError> {
    let metadata = table.map(|name| vec![KeyValue::new(TABLE_NAME_KEY.to_string(), name.to_string())]);
    let props = WriterProperties::builder()
        .set_key_value_metadata(metadata)
        .build();

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    if batch.num_rows() > 0 {
        writer.write(batch)?;
    }
    writer.close()?;
    Ok(())
}

/// Rows with a direct `eventnumber` column next to `runnumber`.
pub fn event_batch(ids: &[Option<i64>]) -> Result<RecordBatch, EventSumError> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("runnumber", DataType::Int32, false),
        Field::new("eventnumber", DataType::Int64, true),
    ]));
    let runs: Int32Array = ids.iter().map(|_| Some(FIXTURE_RUN)).collect();
    let events: Int64Array = ids.iter().copied().collect();
    Ok(RecordBatch::try_new(
        schema,
        vec![Arc::new(runs), Arc::new(events)],
    )?)
}

/// Rows carrying a `DST#Sync` struct. `None` leaves that row's sync record unbound.
pub fn sync_batch(ids: &[Option<i64>]) -> Result<RecordBatch, EventSumError> {
    let fields = Fields::from(vec![
        Field::new("RunNumber", DataType::Int32, true),
        Field::new("EventNumber", DataType::Int64, true),
    ]);
    let runs: ArrayRef = Arc::new(ids.iter().map(|_| Some(FIXTURE_RUN)).collect::<Int32Array>());
    let events: ArrayRef = Arc::new(ids.iter().copied().collect::<Int64Array>());
    let valid = NullBuffer::from(ids.iter().map(Option::is_some).collect::<Vec<bool>>());
    let sync = StructArray::try_new(fields.clone(), vec![runs, events], Some(valid))?;

    let schema = Arc::new(Schema::new(vec![Field::new(
        "DST#Sync",
        DataType::Struct(fields),
        true,
    )]));
    Ok(RecordBatch::try_new(schema, vec![Arc::new(sync)])?)
}

pub fn write_event_file(
    path: &Path,
    table: Option<&str>,
    ids: &[Option<i64>],
) -> Result<(), EventSumError> {
    write_table_file(path, table, &event_batch(ids)?)
}

pub fn write_sync_file(
    path: &Path,
    table: Option<&str>,
    ids: &[Option<i64>],
) -> Result<(), EventSumError> {
    write_table_file(path, table, &sync_batch(ids)?)
}
