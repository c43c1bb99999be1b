//! Environment variable overrides

use super::models::ClientConfig;
use crate::utils::error::{ClientError, Result};
use std::env;
use tracing::debug;

/// Backend base URL
pub const ENV_API_URL: &str = "SENADB_API_URL";
/// Request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "SENADB_TIMEOUT_SECS";
/// Log filter directive
pub const ENV_LOG_LEVEL: &str = "SENADB_LOG_LEVEL";
/// `true`/`1` for JSON log lines
pub const ENV_LOG_JSON: &str = "SENADB_LOG_JSON";

fn get_env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl ClientConfig {
    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(get_env_var)
    }

    /// Apply overrides from an arbitrary lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout
                .parse()
                .map_err(|e| ClientError::config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.logging.json = matches!(json.to_lowercase().as_str(), "true" | "1" | "yes" | "on");
        }

        debug!("Environment overrides applied");
        Ok(self)
    }
}
