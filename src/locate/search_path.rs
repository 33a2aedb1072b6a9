use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::EventSumError;

use super::Locator;

/// Resolves a reference against an ordered list of directories.
#[derive(Debug, Clone, Default)]
pub struct SearchPathLocator {
    dirs: Vec<PathBuf>,
}

impl SearchPathLocator {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl Locator for SearchPathLocator {
    /// An existing path wins outright. Otherwise the file name is tried in each
    /// directory in order. Unresolved references come back unchanged so the
    /// open that follows reports the failure.
    fn locate(&self, reference: &str) -> Result<PathBuf, EventSumError> {
        let direct = Path::new(reference);
        if direct.is_file() {
            debug!("'{}' exists, not searching", reference);
            return Ok(direct.to_path_buf());
        }

        let Some(name) = direct.file_name() else {
            warn!("'{}' has no file name to search for", reference);
            return Ok(direct.to_path_buf());
        };

        for dir in &self.dirs {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("Located '{}' at '{}'", reference, candidate.display());
                return Ok(candidate);
            }
        }

        warn!(
            "'{}' not found in {} search directories",
            reference,
            self.dirs.len()
        );
        Ok(direct.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_existing_path_is_returned() {
        let dir = TempDir::new().unwrap();
        let path = touch(dir.path(), "a.parquet");
        let locator = SearchPathLocator::new(vec![PathBuf::from("/nonexistent")]);
        assert_eq!(locator.locate(path.to_str().unwrap()).unwrap(), path);
    }

    #[test]
    fn test_first_matching_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let third = TempDir::new().unwrap();
        touch(second.path(), "seg.parquet");
        touch(third.path(), "seg.parquet");

        let locator = SearchPathLocator::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
            third.path().to_path_buf(),
        ]);
        assert_eq!(
            locator.locate("seg.parquet").unwrap(),
            second.path().join("seg.parquet")
        );
    }

    #[test]
    fn test_logical_prefix_is_stripped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "seg.parquet");
        let locator = SearchPathLocator::new(vec![dir.path().to_path_buf()]);
        assert_eq!(
            locator.locate("/lfn/run2pp/seg.parquet").unwrap(),
            dir.path().join("seg.parquet")
        );
    }

    #[test]
    fn test_unresolved_reference_passes_through() {
        let dir = TempDir::new().unwrap();
        let locator = SearchPathLocator::new(vec![dir.path().to_path_buf()]);
        assert_eq!(
            locator.locate("missing.parquet").unwrap(),
            PathBuf::from("missing.parquet")
        );
    }

    #[test]
    fn test_directories_are_not_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("seg.parquet")).unwrap();
        let locator = SearchPathLocator::new(vec![dir.path().to_path_buf()]);
        assert_eq!(
            locator.locate("seg.parquet").unwrap(),
            PathBuf::from("seg.parquet")
        );
    }
}
