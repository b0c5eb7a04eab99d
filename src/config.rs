//! Configuration loading: defaults, an optional `repolens.toml`, then
//! environment overrides.
//!
//! The API key is deliberately never read from a config file. It comes from
//! `OPENAI_API_KEY` and travels as an explicit value into the provider
//! constructor.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "repolens.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(skip)]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 4000,
            temperature: 0.5,
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Marker splitting a model response into structure and logic sections.
    pub section_marker: String,
    /// Recorded as the logic section when the marker is missing.
    pub missing_logic_sentinel: String,
    /// Appended to mirrored directory names and report file names.
    pub suffix_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            section_marker: "Logic:".to_string(),
            missing_logic_sentinel: "could not extract logic".to_string(),
            suffix_label: "_analysis".to_string(),
        }
    }
}

impl Config {
    /// Loads `repolens.toml` from the current directory, then from the user
    /// config directory, falling back to defaults. `OPENAI_API_KEY` and
    /// `OPENAI_BASE_URL` always come from the environment.
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.provider.api_key = key;
        }
        if let Ok(endpoint) = std::env::var("OPENAI_BASE_URL") {
            config.provider.endpoint = endpoint;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config in {}", path.display()))
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("repolens").join("config.toml");
    user.exists().then_some(user)
}
