//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber could not be installed: {0}")]
    TelemetryInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Probability tolerance must be in (0, 0.01], got {0}")]
    InvalidProbabilityTolerance(f64),

    #[error("Default discount rate must be a non-negative number, got {0}")]
    InvalidDiscountRate(f64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
