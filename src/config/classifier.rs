//! Intent classifier configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest deadline a deployment may configure.
const MAX_TIMEOUT_SECS: u64 = 300;

/// Simulated classifier configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Simulated inference latency in milliseconds
    #[serde(default = "default_latency")]
    pub latency_ms: u64,

    /// Deadline for a single classification in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get latency as Duration
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }

        let timeout_ms = self.timeout_secs * 1000;
        if self.latency_ms >= timeout_ms {
            return Err(ValidationError::LatencyExceedsTimeout {
                latency_ms: self.latency_ms,
                timeout_ms,
            });
        }

        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_latency() -> u64 {
    800
}

fn default_timeout() -> u64 {
    30
}
