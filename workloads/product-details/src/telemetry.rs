//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TelemetryConfig};

/// Install the process-wide subscriber.
///
/// `RUST_LOG` overrides the configured filter. Safe to call more than once;
/// later calls are no-ops.
pub fn init(config: &TelemetryConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.try_init(),
    };
}

/// Parse the configured directives, falling back to `info` when invalid.
fn configured_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = TelemetryConfig::default();
        init(&config);
        init(&config);
        tracing::info!("telemetry initialized");
    }

    #[test]
    fn test_bad_filter_falls_back_to_info() {
        let fallback = EnvFilter::new("info").to_string();
        assert_eq!(configured_filter("not a [valid filter").to_string(), fallback);
    }

    #[test]
    fn test_valid_filter_is_kept() {
        let filter = configured_filter("product_details=debug").to_string();
        assert!(filter.contains("product_details=debug"), "{filter}");
    }
}
