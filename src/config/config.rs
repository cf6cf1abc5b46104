use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{ConfigError, LoggingConfig};
use crate::groups::config::GroupOverride;

/// Top-level configuration, deserialised from TOML.
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [groups.users]
/// prefix = "v2/users"
///
/// [groups.legacy]
/// enabled = false
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-group overrides keyed by group name
    #[serde(default)]
    pub groups: BTreeMap<String, GroupOverride>,
}

impl Config {
    /// Read, parse and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.log_to_file && self.logging.log_file_path.trim().is_empty() {
            return Err(ConfigError::InvalidLogFile);
        }
        for (name, group) in &self.groups {
            group.validate(name)?;
        }
        Ok(())
    }
}
