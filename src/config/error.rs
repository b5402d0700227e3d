//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Classifier timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Classifier latency ({latency_ms}ms) must be below the timeout ({timeout_ms}ms)")]
    LatencyExceedsTimeout { latency_ms: u64, timeout_ms: u64 },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogDirective(String),
}
