//! Configuration management for the client
//!
//! Configuration comes from a YAML file, from environment variables, or from
//! [`ConfigBuilder`]. Every source is validated before use.

pub mod builder;
pub mod loader;
pub mod models;
pub mod validation;

pub use builder::ConfigBuilder;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ClientError, Result};
use std::path::Path;
use tracing::{debug, info};

impl ClientConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::config(format!("Failed to read config file: {}", e)))?;

        let config: ClientConfig = serde_yaml::from_str(&content)
            .map_err(|e| ClientError::config(format!("Failed to parse config: {}", e)))?;

        config.validate().map_err(ClientError::Config)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides()?;
        config.validate().map_err(ClientError::Config)?;
        Ok(config)
    }

    /// Request timeout as a [`std::time::Duration`]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// Member list cache lifetime
    pub fn member_cache_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.member_cache_ttl_secs)
    }
}
