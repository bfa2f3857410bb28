use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the product API
    #[serde(default)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::Config("Could not determine user config directory".to_string())
        })?;
        Ok(config_dir.join("shopfront").join("config.toml"))
    }
}

/// Resolve the product API base URL based on priority:
/// 1. Explicit URL (command-line flag)
/// 2. SHOPFRONT_API environment variable
/// 3. Config file `api_url`
/// 4. Built-in default endpoint
pub fn resolve_api_url(explicit: Option<&str>, config: &Config) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Ok(env_url) = std::env::var("SHOPFRONT_API") {
        return env_url;
    }

    if let Some(url) = &config.api_url {
        return url.clone();
    }

    shopfront_source::http::DEFAULT_API_URL.to_string()
}
