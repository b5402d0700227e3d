//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAREER_NAVIGATOR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use career_navigator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Simulated latency: {:?}", config.classifier.latency());
//! ```

mod classifier;
mod error;
mod telemetry;

pub use classifier::ClassifierConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::{LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated classifier (latency, deadline)
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Logging (filter directive, format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAREER_NAVIGATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAREER_NAVIGATOR__CLASSIFIER__LATENCY_MS=800` -> `classifier.latency_ms = 800`
    /// - `CAREER_NAVIGATOR__TELEMETRY__FORMAT=json` -> `telemetry.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_NAVIGATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.classifier.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
