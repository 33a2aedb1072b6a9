use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable the pipeline's file locator reads its search path from.
pub const SEARCH_PATH_ENV: &str = "GSEARCHPATH";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocatorConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "LocatorConfig::default_search_path")]
    pub search_path: Vec<PathBuf>,
}

impl LocatorConfig {
    fn default_search_path() -> Vec<PathBuf> {
        search_path_from(std::env::var(SEARCH_PATH_ENV).ok().as_deref())
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            search_path: Self::default_search_path(),
        }
    }
}

/// Search path from an optional `GSEARCHPATH` value; unset means none.
fn search_path_from(value: Option<&str>) -> Vec<PathBuf> {
    value.map(parse_search_path).unwrap_or_default()
}

/// Split a colon-separated search path, dropping empty components.
pub fn parse_search_path(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_path() {
        assert_eq!(
            parse_search_path("/sphenix/lustre01:.::/data/dst"),
            vec![
                PathBuf::from("/sphenix/lustre01"),
                PathBuf::from("."),
                PathBuf::from("/data/dst"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_search_path() {
        assert!(parse_search_path("").is_empty());
        assert!(parse_search_path(":::").is_empty());
    }

    #[test]
    fn test_search_path_from_env_value() {
        assert!(search_path_from(None).is_empty());
        assert_eq!(
            search_path_from(Some(".:/sphenix/lustre01/sphnxpro")),
            vec![PathBuf::from("."), PathBuf::from("/sphenix/lustre01/sphnxpro")]
        );
    }

    #[test]
    fn test_locator_disabled_by_default() {
        assert!(!LocatorConfig::default().enabled);
    }
}
