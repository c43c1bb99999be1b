//! Configuration validation

use super::models::*;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| format!("api_base_url has invalid URL format: {}", e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "api_base_url must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        for (name, path) in [
            ("entry_path", &self.entry_path),
            ("register_path", &self.register_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("{} must start with '/', got: {}", name, path));
            }
        }

        self.logging.validate()
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("logging.level cannot be empty".to_string());
        }
        Ok(())
    }
}
