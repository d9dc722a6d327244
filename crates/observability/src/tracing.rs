//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install a global fmt subscriber for `config`.
///
/// Returns `false` if a subscriber was already installed (the call is then a
/// no-op).
pub fn init_with(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_target(false).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if installed.is_err() {
        return false;
    }
    ::tracing::debug!(filter = %config.filter, format = ?config.format, "logging initialized");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_noop() {
        let config = ObservabilityConfig::default();
        let _ = init_with(&config);
        assert!(!init_with(&config));
        crate::init();
    }
}
