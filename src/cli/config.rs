//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::StoreConfig;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Storage directory holding `notes.db`
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/appnotes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("appnotes")
            .join("config.toml")
    }

    /// Resolve the store configuration, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform local data directory (`<data_local_dir>/AppNotes`)
    ///
    /// Relative directories are resolved against the current directory.
    pub fn store_config(&self, cli_dir: Option<&PathBuf>) -> Result<StoreConfig> {
        match cli_dir.or(self.dir.as_ref()) {
            Some(dir) => {
                let dir = std::path::absolute(dir)
                    .with_context(|| format!("invalid storage directory: {}", dir.display()))?;
                Ok(StoreConfig::in_dir(dir))
            }
            None => StoreConfig::platform_default().context("failed to locate note storage"),
        }
    }
}
