use serde::Deserialize;

/// Settings for the tracing subscriber installed by [`crate::logging::init`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `endpoint_groups=debug`
    pub level: String,
    pub log_to_file: bool,
    pub log_file_path: String,
    /// Include source file and line number in each event
    pub with_file_and_line: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_file: false,
            log_file_path: String::new(),
            with_file_and_line: true,
        }
    }
}

/// Default log level for the logging configuration
fn default_log_level() -> String {
    "info".to_string()
}
