//! Configuration management for naraka CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Intermediary that remote share-code URLs are fetched through
pub const DEFAULT_PROXY: &str = "https://proxy.corsfix.com?";

fn default_proxy() -> Option<String> {
    Some(DEFAULT_PROXY.to_string())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Prefix prepended to remote URLs; empty disables the intermediary
    #[serde(default = "default_proxy")]
    pub proxy: Option<String>,

    /// Preset store location override
    #[serde(default)]
    pub presets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            proxy: default_proxy(),
            presets_dir: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("naraka");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Proxy prefix, or None if fetching directly
    pub fn get_proxy(&self) -> Option<&str> {
        self.proxy.as_deref().filter(|p| !p.is_empty())
    }

    pub fn set_proxy(&mut self, proxy: Option<String>) {
        // An empty string survives a save/load cycle, None would not
        self.proxy = Some(proxy.unwrap_or_default());
    }

    /// Resolve the preset store directory
    pub fn presets_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.presets_dir {
            return Ok(dir.clone());
        }

        Ok(dirs::data_dir()
            .context("Could not determine data directory")?
            .join("naraka")
            .join("presets"))
    }

    pub fn set_presets_dir(&mut self, dir: PathBuf) {
        self.presets_dir = Some(dir);
    }
}
