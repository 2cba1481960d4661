//! Configuration management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Explorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL of the Ark server; info is read from `{asp_url}/v1/info`
    pub asp_url: String,
    /// Freshness window for cached server info
    pub info_ttl_secs: u64,
    pub request_timeout_secs: u64,
    /// Where to persist server info between sessions (disabled when unset)
    pub session_path: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            asp_url: "http://localhost:7070".to_string(),
            info_ttl_secs: 3600,
            request_timeout_secs: 10,
            session_path: None,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from a TOML file (if `ARK_EXPLORER_CONFIG` is set)
    /// and then environment variables, which take precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("ARK_EXPLORER_CONFIG") {
            Ok(path) => Self::from_toml_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override fields from `ARK_EXPLORER_*` variables resolved by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ARK_EXPLORER_ASP_URL") {
            self.asp_url = url;
        }

        if let Some(ttl) = lookup("ARK_EXPLORER_INFO_TTL_SECS") {
            self.info_ttl_secs = ttl
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("Invalid info_ttl_secs: {}", e)))?;
        }

        if let Some(timeout) = lookup("ARK_EXPLORER_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("Invalid request_timeout_secs: {}", e)))?;
        }

        if let Some(path) = lookup("ARK_EXPLORER_SESSION_PATH") {
            self.session_path = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.asp_url.starts_with("http://") || self.asp_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "asp_url must be an http(s) URL: {:?}",
                self.asp_url
            )));
        }

        if self.info_ttl_secs == 0 {
            return Err(ConfigError::Invalid("info_ttl_secs must be > 0".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be > 0".to_string()));
        }

        Ok(())
    }

    pub fn info_ttl(&self) -> Duration {
        Duration::from_secs(self.info_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
