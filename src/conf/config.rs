use std::path::Path;

use crate::{
    conf::{BatchConfig, LocatorConfig, SummaryConfig},
    core::EventSumError::{self, ConfigParsingError},
};
use config::{Config as CConfig, Map};
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides, e.g. `EVENTSUM_SUMMARY__TABLE=T`.
const ENV_PREFIX: &str = "EVENTSUM";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub locator: LocatorConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, EventSumError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }

    /// Load an optional TOML file, then apply `EVENTSUM_` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Config, EventSumError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading overrides from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Config, EventSumError> {
        let mut builder = CConfig::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    // colon-separated like GSEARCHPATH
                    .list_separator(":")
                    .with_list_parse_key("locator.search_path")
                    .source(env),
            )
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn load_correct_toml() {
        let toml = r#"
        [summary]
        table = "DST"
        field = "evtno"

        [locator]
        enabled = true
        search_path = ["/data/a", "/data/b"]

        [batch]
        quiet_crashes = false
        "#;
        let conf = Config::from_str(toml).unwrap();
        assert_eq!(conf.summary.table, "DST");
        assert_eq!(conf.summary.field, "evtno");
        assert_eq!(conf.summary.sync_column, "DST#Sync");
        assert!(conf.locator.enabled);
        assert_eq!(
            conf.locator.search_path,
            vec![PathBuf::from("/data/a"), PathBuf::from("/data/b")]
        );
        assert!(!conf.batch.quiet_crashes);
    }

    #[test]
    fn load_empty_toml_uses_defaults() {
        let conf = Config::from_str("").unwrap();
        assert_eq!(conf.summary, SummaryConfig::default());
        assert!(!conf.locator.enabled);
        assert!(conf.batch.quiet_crashes);
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
        [summary]
        tree = "T"
        "#;
        let err = Config::from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigParsingError(_)));
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Config::load(Some(Path::new("/nonexistent/eventsum.toml"))).unwrap_err();
        assert!(matches!(err, ConfigParsingError(_)));
    }

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn env_overrides_search_path_list() {
        let conf = Config::load_with_env(
            None,
            env(&[
                ("EVENTSUM_LOCATOR__SEARCH_PATH", "/a:/b"),
                ("EVENTSUM_LOCATOR__ENABLED", "true"),
            ]),
        )
        .unwrap();
        assert!(conf.locator.enabled);
        assert_eq!(
            conf.locator.search_path,
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn env_single_search_dir() {
        let conf =
            Config::load_with_env(None, env(&[("EVENTSUM_LOCATOR__SEARCH_PATH", "/sphenix/lustre01")]))
                .unwrap();
        assert_eq!(
            conf.locator.search_path,
            vec![PathBuf::from("/sphenix/lustre01")]
        );
    }

    #[test]
    fn env_overrides_scalars_over_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("eventsum.toml");
        std::fs::write(&path, "[summary]\ntable = \"Events\"\n\n[batch]\nquiet_crashes = true\n")
            .unwrap();

        let conf = Config::load_with_env(
            Some(&path),
            env(&[
                ("EVENTSUM_SUMMARY__TABLE", "T"),
                ("EVENTSUM_BATCH__QUIET_CRASHES", "false"),
                ("UNRELATED", "ignored"),
            ]),
        )
        .unwrap();
        assert_eq!(conf.summary.table, "T");
        assert!(!conf.batch.quiet_crashes);
    }

    #[test]
    fn env_unknown_key_rejected() {
        let err = Config::load_with_env(None, env(&[("EVENTSUM_SUMMARY__TREE", "T")])).unwrap_err();
        assert!(matches!(err, ConfigParsingError(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("eventsum.toml");
        std::fs::write(&path, "[summary]\ntable = \"Events\"\n").unwrap();
        let conf = Config::load_with_env(Some(&path), env(&[])).unwrap();
        assert_eq!(conf.summary.table, "Events");
    }
}
