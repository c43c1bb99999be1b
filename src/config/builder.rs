//! Configuration builder

use super::models::{ClientConfig, LoggingConfig};
use super::validation::Validate;
use crate::utils::error::{ClientError, Result};

/// Builder for creating client configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    /// Request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Entry page used for session-expiry redirects
    pub fn entry_path(mut self, path: impl Into<String>) -> Self {
        self.config.entry_path = path.into();
        self
    }

    /// Registration page
    pub fn register_path(mut self, path: impl Into<String>) -> Self {
        self.config.register_path = path.into();
        self
    }

    /// Member list cache lifetime in seconds
    pub fn member_cache_ttl_secs(mut self, secs: u64) -> Self {
        self.config.member_cache_ttl_secs = secs;
        self
    }

    /// Logging configuration
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate().map_err(ClientError::Config)?;
        Ok(self.config)
    }
}
