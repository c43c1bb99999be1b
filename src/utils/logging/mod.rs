//! Logging setup
//!
//! Installs a `tracing` subscriber driven by [`LoggingConfig`]. `RUST_LOG`
//! takes precedence over the configured level when it is set. Output goes to
//! stderr so it never interleaves with shell output.

use crate::config::LoggingConfig;
use crate::utils::error::{ClientError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Fails with a configuration error if the level does not parse or a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            ClientError::config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ClientError::config(format!("Failed to install logger: {}", e)))
}
