use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Log panics as one line instead of the default backtrace output.
    #[serde(default = "BatchConfig::default_quiet_crashes")]
    pub quiet_crashes: bool,
}

impl BatchConfig {
    fn default_quiet_crashes() -> bool {
        true
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            quiet_crashes: Self::default_quiet_crashes(),
        }
    }
}
