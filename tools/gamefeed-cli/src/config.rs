//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "gamefeed.toml";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Feed defaults.
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Defaults for feed commands; flags override every field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Listing endpoint URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Default sort key (`default`, `price_asc`, ...).
    #[serde(default)]
    pub sort: Option<String>,

    /// Pause between page fetches, in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

impl CliConfig {
    /// Load config from an explicit path, or from `gamefeed.toml` when it
    /// exists, or fall back to defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load(DEFAULT_CONFIG_PATH)
            }
            None => Ok(Self::default()),
        }
    }

    fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML config: {}", path))
    }
}
