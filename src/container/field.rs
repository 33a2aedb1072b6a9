use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Int64Type};
use log::warn;

use crate::core::EventSumError;

/// How the event identifier is reached inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventField {
    /// Integer column read as is.
    Direct(String),
    /// Integer child of a struct column holding the sync record.
    Sync { column: String, field: String },
}

impl EventField {
    pub fn direct(column: impl Into<String>) -> Self {
        EventField::Direct(column.into())
    }

    pub fn sync(column: impl Into<String>, field: impl Into<String>) -> Self {
        EventField::Sync {
            column: column.into(),
            field: field.into(),
        }
    }

    /// Top-level column that has to be read.
    pub fn column(&self) -> &str {
        match self {
            EventField::Direct(column) => column,
            EventField::Sync { column, .. } => column,
        }
    }

    /// Identifier from the first slot of `array`, the projected top-level column.
    pub(super) fn extract(&self, array: &ArrayRef) -> Result<Option<i64>, EventSumError> {
        match self {
            EventField::Direct(column) => integer_value(column, array),
            EventField::Sync { column, field } => {
                let Some(sync) = array.as_struct_opt() else {
                    warn!(
                        "Column '{}' is {}, expected a struct",
                        column,
                        array.data_type()
                    );
                    return Ok(None);
                };
                // unbound sync record
                if sync.is_null(0) {
                    return Ok(None);
                }
                match sync.column_by_name(field) {
                    Some(child) => integer_value(&format!("{column}.{field}"), child),
                    None => {
                        warn!("Column '{}' has no field '{}'", column, field);
                        Ok(None)
                    }
                }
            }
        }
    }
}

fn integer_value(name: &str, array: &ArrayRef) -> Result<Option<i64>, EventSumError> {
    if !array.data_type().is_integer() {
        warn!("Column '{}' is {}, expected an integer", name, array.data_type());
        return Ok(None);
    }
    if array.is_empty() || array.is_null(0) {
        return Ok(None);
    }

    let widened = cast(array, &DataType::Int64)?;
    if widened.is_null(0) {
        warn!("Column '{}' value does not fit in i64", name);
        return Ok(None);
    }
    Ok(Some(widened.as_primitive::<Int64Type>().value(0)))
}
