//! Shared tracing/logging setup for processes embedding the warehouse domain.

/// Environment-driven configuration.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls are no-ops. An unusable
/// `STOCKYARD_LOG_FORMAT` falls back to JSON output.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_default();
    tracing::init_with(&config);
}
