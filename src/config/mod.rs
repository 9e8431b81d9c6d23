//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::query::{DEFAULT_PAGE, DEFAULT_SIZE, DEFAULT_SORT};
use crate::storage::InMemoryJobStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:8081`
    pub base_url: String,

    /// Request timeout in seconds; the transport default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Bearer token attached to every request when set
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout_secs: None,
            bearer_token: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Values filled into queries that leave page, size or sort unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDefaults {
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_size")]
    pub size: usize,

    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            sort: default_sort(),
        }
    }
}

/// Fallback corpus settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Serve the local corpus when the backend has no usable data
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// JSON or YAML file with the corpus; the bundled listings are used when unset
    #[serde(default)]
    pub corpus_path: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            corpus_path: None,
        }
    }
}

impl FallbackConfig {
    /// Load the configured corpus
    pub fn load_corpus(&self) -> Result<InMemoryJobStore, ConfigError> {
        match &self.corpus_path {
            Some(path) => InMemoryJobStore::from_file(path),
            None => Ok(InMemoryJobStore::builtin()),
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub defaults: QueryDefaults,

    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values a client cannot work without
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "base_url".to_string(),
                context: "api".to_string(),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                message: format!("'{}' is not an http(s) URL", base_url),
            });
        }

        if self.defaults.size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "defaults.size".to_string(),
                message: "page size must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Create a default configuration pointing at a local backend
    pub fn default_config() -> Self {
        Self::default()
    }
}
