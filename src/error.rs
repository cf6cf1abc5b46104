//! Error types for endpoint composition

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for composition operations
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Startup-time configuration failures raised while composing routes.
///
/// None of these are recoverable: they indicate a broken descriptor set
/// and are meant to abort application startup.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Duplicate endpoint group names detected: {}", .0.join(", "))]
    DuplicateGroupName(Vec<String>),

    #[error("Endpoints refer to missing groups: {}", .0.join(", "))]
    UnknownGroupReference(Vec<String>),

    #[error("Required argument was not supplied: {0}")]
    MissingArgument(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ComposeError {
    /// Names carried by the error, if any
    pub fn names(&self) -> &[String] {
        match self {
            ComposeError::DuplicateGroupName(names)
            | ComposeError::UnknownGroupReference(names) => names,
            _ => &[],
        }
    }
}
