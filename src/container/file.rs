use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use parquet::arrow::arrow_reader::{
    ArrowReaderMetadata, ArrowReaderOptions, ParquetRecordBatchReaderBuilder,
};

use crate::core::EventSumError;

use super::{TABLE_NAME_KEY, Table};

/// Open read handle for a data file. Metadata is parsed once on open and
/// shared by every read.
#[derive(Debug)]
pub struct DataFile {
    path: PathBuf,
    file: File,
    metadata: ArrowReaderMetadata,
}

impl DataFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EventSumError> {
        let path = path.as_ref();
        let open_error = |reason: String| EventSumError::OpenError {
            path: path.display().to_string(),
            reason,
        };

        let file = File::open(path).map_err(|e| open_error(e.to_string()))?;
        let metadata = ArrowReaderMetadata::load(&file, ArrowReaderOptions::new())
            .map_err(|e| open_error(e.to_string()))?;

        debug!(
            "Opened '{}': {} rows in {} row groups",
            path.display(),
            metadata.metadata().file_metadata().num_rows(),
            metadata.metadata().num_row_groups()
        );

        Ok(Self {
            path: path.to_path_buf(),
            file,
            metadata,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the table this file holds, if it declares one.
    pub fn table_name(&self) -> Option<&str> {
        self.metadata
            .metadata()
            .file_metadata()
            .key_value_metadata()?
            .iter()
            .find(|kv| kv.key == TABLE_NAME_KEY)?
            .value
            .as_deref()
    }

    pub fn table(&self, name: &str) -> Option<Table<'_>> {
        if self.table_name() == Some(name) {
            Some(Table::new(self, name))
        } else {
            None
        }
    }

    pub(super) fn metadata(&self) -> &ArrowReaderMetadata {
        &self.metadata
    }

    pub(super) fn reader(&self) -> Result<ParquetRecordBatchReaderBuilder<File>, EventSumError> {
        Ok(ParquetRecordBatchReaderBuilder::new_with_metadata(
            self.file.try_clone()?,
            self.metadata.clone(),
        ))
    }
}
