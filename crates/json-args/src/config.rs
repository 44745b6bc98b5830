//! Codec configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on resolver re-entries.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the Float decoder treats payloads that encode non-finite numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Only double and integer nodes decode as Float. A `null` (NaN) or
    /// `"inf"` payload written by the encoder is a shape mismatch.
    #[default]
    Strict,
    /// `null` decodes as NaN and infinity strings decode as ±infinity.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgsConfig {
    pub max_depth: usize,
    pub non_finite: NonFinitePolicy,
}

impl ArgsConfig {
    pub const DEFAULT: ArgsConfig = ArgsConfig {
        max_depth: DEFAULT_MAX_DEPTH,
        non_finite: NonFinitePolicy::Strict,
    };

    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for ArgsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
