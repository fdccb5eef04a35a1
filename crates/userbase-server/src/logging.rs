//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use userbase_config::LoggingConfig;

/// Builds the filter: `RUST_LOG` when set, the configured directive otherwise.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Installs the global subscriber, as JSON lines or human-readable output.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(build_filter(config));

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_directive() {
        let config = LoggingConfig {
            filter: "warn,userbase=trace".to_string(),
            json: true,
        };
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = build_filter(&config).to_string();
            assert!(filter.contains("userbase=trace"));
            assert!(filter.contains("warn"));
        }
    }
}
