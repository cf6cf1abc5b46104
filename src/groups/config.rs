use serde::Deserialize;

use crate::config::ConfigError;

/// Operator override for a registered endpoint group
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroupOverride {
    /// Replaces the group's own route prefix; empty string mounts at the root
    pub prefix: Option<String>,
    /// Disabled groups are removed from composition along with their endpoints
    pub enabled: bool,
}

impl Default for GroupOverride {
    fn default() -> Self {
        Self {
            prefix: None,
            enabled: true,
        }
    }
}

impl GroupOverride {
    pub fn validate(&self, group: &str) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.prefix {
            if prefix.contains('*') || prefix.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidPrefix {
                    group: group.to_string(),
                    prefix: prefix.clone(),
                });
            }
        }
        Ok(())
    }
}
