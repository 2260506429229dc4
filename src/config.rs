use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{endpoints, logging};
use crate::error::PollError;

pub const CONFIG_PATH: &str = "config.yaml";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    endpoints::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    logging::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load `config.yaml` from the working directory, falling back to defaults when absent.
    pub fn load() -> Result<Self, PollError> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PollError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, PollError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // An empty file is a valid "use the defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: AppConfig = serde_yaml::from_str(content)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.base_url.is_empty() {
            return Err(PollError::Config("base_url must not be empty".to_string()));
        }
        Ok(config)
    }
}
