//! Configuration data models

use serde::{Deserialize, Serialize};

/// Default backend base URL
pub fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout_secs() -> u64 {
    30
}

/// Default entry (login) page
pub fn default_entry_path() -> String {
    "/".to_string()
}

/// Default registration page
pub fn default_register_path() -> String {
    "/register".to_string()
}

/// Default member list cache lifetime in seconds
pub fn default_member_cache_ttl_secs() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, paths are appended verbatim
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Page the user is sent to when the session expires
    #[serde(default = "default_entry_path")]
    pub entry_path: String,
    /// Registration page; session expiry never redirects away from it
    #[serde(default = "default_register_path")]
    pub register_path: String,
    /// Member list cache lifetime in seconds
    #[serde(default = "default_member_cache_ttl_secs")]
    pub member_cache_ttl_secs: u64,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            entry_path: default_entry_path(),
            register_path: default_register_path(),
            member_cache_ttl_secs: default_member_cache_ttl_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `senadb_client=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
