//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! (and optionally a file) using the `config` and `dotenvy` crates. Configuration
//! is loaded with the `DECISION_ECONOMICS` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_economics::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let builder = config.engine.model_builder();
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "DECISION_ECONOMICS";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Numeric defaults for decision models
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_ECONOMICS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_ECONOMICS__ENGINE__DEFAULT_DISCOUNT_RATE=0.01` -> `engine.default_discount_rate = 0.01`
    /// - `DECISION_ECONOMICS__LOGGING__JSON=true` -> `logging.json = true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a YAML, TOML or JSON file, with environment
    /// variables taking precedence over file values.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DECISION_ECONOMICS__ENGINE__PROBABILITY_TOLERANCE");
        env::remove_var("DECISION_ECONOMICS__ENGINE__DEFAULT_DISCOUNT_RATE");
        env::remove_var("DECISION_ECONOMICS__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.probability_tolerance, 1e-6);
        assert_eq!(config.engine.default_discount_rate, 0.0);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_ECONOMICS__ENGINE__DEFAULT_DISCOUNT_RATE", "0.01");
        env::set_var("DECISION_ECONOMICS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.default_discount_rate, 0.01);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "engine:\n  probability_tolerance: 0.0001\n  default_discount_rate: 0.02").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.engine.probability_tolerance, 0.0001);
        assert_eq!(config.engine.default_discount_rate, 0.02);
        assert_eq!(config.logging.filter, "info,decision_economics=debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_ECONOMICS__ENGINE__DEFAULT_DISCOUNT_RATE", "0.03");

        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "engine:\n  default_discount_rate: 0.02").unwrap();

        let result = AppConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().engine.default_discount_rate, 0.03);
    }

    #[test]
    fn test_validate_rejects_bad_engine_values() {
        let config = AppConfig {
            engine: EngineConfig {
                probability_tolerance: 0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
