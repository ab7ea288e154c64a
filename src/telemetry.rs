//! Tracing subscriber setup for binaries and tools embedding the engine.

use crate::config::{ConfigError, LoggingConfig};

/// Installs a global `tracing` subscriber configured from `config`.
///
/// # Errors
/// - `ValidationFailed` if the filter directive does not parse
/// - `TelemetryInit` if a global subscriber is already installed
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConfigError::TelemetryInit(e.to_string()))
}
