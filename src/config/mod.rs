mod logging_config;
pub mod config;

use std::path::PathBuf;
use thiserror::Error;

pub use config::Config;
pub use logging_config::LoggingConfig;

/// Errors raised while loading or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Group override refers to an unregistered group: {0}")]
    UnknownGroup(String),

    #[error("Invalid route prefix for group '{group}': {prefix}")]
    InvalidPrefix { group: String, prefix: String },

    #[error("log_file_path must be set when log_to_file is enabled")]
    InvalidLogFile,
}
