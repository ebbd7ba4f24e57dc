use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FraudScopeError;
use crate::history::{DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY};

/// Environment variable overriding the scoring service URL.
pub const API_URL_ENV: &str = "FRAUDSCOPE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin serving `/health`, `/predict` and `/model-info`.
    pub api_base_url: String,
    pub storage_key: String,
    pub history_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Replace the base URL when an override is present and non-blank.
    pub fn apply_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), FraudScopeError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            FraudScopeError::Config(format!("Invalid API URL '{}': {}", self.api_base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FraudScopeError::Config(format!(
                "API URL must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(FraudScopeError::Config("Storage key cannot be empty".to_string()));
        }
        if self.history_capacity == 0 || self.history_capacity > DEFAULT_CAPACITY {
            return Err(FraudScopeError::Config(format!(
                "History capacity must be between 1 and {}, got {}",
                DEFAULT_CAPACITY, self.history_capacity
            )));
        }
        Ok(())
    }

    #[cfg(feature = "cli")]
    pub fn from_toml_str(content: &str) -> Result<Self, FraudScopeError> {
        toml::from_str(content).map_err(|e| FraudScopeError::Config(format!("Invalid config: {}", e)))
    }

    /// Load from an optional TOML file, then apply `FRAUDSCOPE_API_URL`.
    #[cfg(feature = "cli")]
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, FraudScopeError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    FraudScopeError::Config(format!("Failed to read {:?}: {}", path, e))
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }
}
