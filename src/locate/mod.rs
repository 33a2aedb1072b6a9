//! Translation of logical file references into paths that can be opened.

mod search_path;

use std::path::PathBuf;

use crate::conf::LocatorConfig;
use crate::core::EventSumError;

pub use search_path::SearchPathLocator;

pub trait Locator {
    fn locate(&self, reference: &str) -> Result<PathBuf, EventSumError>;
}

/// Opens exactly what it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLocator;

impl Locator for IdentityLocator {
    fn locate(&self, reference: &str) -> Result<PathBuf, EventSumError> {
        Ok(PathBuf::from(reference))
    }
}

/// Pick the locator for this run. `force` comes from the command line and
/// enables the search path even when the config leaves it off.
pub fn from_config(config: &LocatorConfig, force: bool) -> Box<dyn Locator> {
    if config.enabled || force {
        Box::new(SearchPathLocator::new(config.search_path.clone()))
    } else {
        Box::new(IdentityLocator)
    }
}
