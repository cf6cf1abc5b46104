use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level directive: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to create log file: {0}")]
    File(#[from] std::io::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global tracing subscriber.
///
/// Events go to stdout and, when `log_to_file` is set, to
/// `log_file_path` as well. Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.level)?;

    let stdout_layer = fmt::layer()
        .with_file(config.with_file_and_line)
        .with_line_number(config.with_file_and_line);

    if config.log_to_file {
        let file = std::fs::File::create(&config.log_file_path)?;
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_file(config.with_file_and_line)
            .with_line_number(config.with_file_and_line)
            .with_writer(Mutex::new(file));

        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .with(file_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .try_init()?;
    }

    Ok(())
}
