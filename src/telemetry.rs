//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays reserved for machine-readable output.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TelemetryConfig};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured directive; an unparseable directive
/// falls back to `info`. Returns `false` when a subscriber was already set.
pub fn init(config: &TelemetryConfig) -> bool {
    let filter = filter_for(&config.log_level);

    let installed = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.is_ok()
}

fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
