//! Configuration management
//!
//! Defaults for the command-line options, read from
//! `~/.lastpage/config.yaml`:
//!
//! ```yaml
//! user: alice
//! password: secret
//! api_url: https://fluiddb.fluidinfo.com
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default Fluidinfo username
    pub user: Option<String>,

    /// Default Fluidinfo password
    pub password: Option<String>,

    /// Fluidinfo API endpoint
    pub api_url: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`. A missing or empty file gives
    /// the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
            .join(".lastpage");

        Ok(config_dir.join("config.yaml"))
    }
}
