//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at the configured
/// level and everything else stays quiet.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}

fn default_directive(config: &LoggingConfig) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), config.level)
}
