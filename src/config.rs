///! Runtime configuration
///!
///! Loaded from a TOML file when one exists; every field has a default so
///! an empty or absent file still yields a working setup. The NASA API key
///! is never a literal in source: the default is NASA's public rate-limited
///! `DEMO_KEY`, and the `NASA_API_KEY` environment variable overrides
///! whatever the file says.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "NASA_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_base_url() -> String {
    "https://api.nasa.gov/neo/rest/v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl NeoConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NeoConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Read the file at `path` when it exists, fall back to defaults
    /// otherwise, then apply the environment override.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = key.trim().to_string();
            }
        }
        Ok(config)
    }
}
