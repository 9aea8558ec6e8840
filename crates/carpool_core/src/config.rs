use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selection::SelectionPolicy;

/// Knobs for one allocation run. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllocatorConfig {
    /// Policy for the balancing pass of both phases.
    pub policy: SelectionPolicy,
    /// When false, drivers' group affinities are ignored and every group goes
    /// straight to the balancing pass.
    pub respect_affinity: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::Balanced,
            respect_affinity: true,
        }
    }
}

impl AllocatorConfig {
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_affinity(mut self, enabled: bool) -> Self {
        self.respect_affinity = enabled;
        self
    }

    /// Reads a JSON config file such as `{"policy": "fill_ratio"}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
