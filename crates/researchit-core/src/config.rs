//! User configuration loaded from `~/.researchit/config.toml`
//!
//! A missing file yields defaults; a malformed file is an error the caller
//! surfaces, not something to silently paper over.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{search, ui};
use crate::paths;

/// Persistent user configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the search service
    pub server_url: String,
    /// How many results to request per search
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: ui::DEFAULT_SERVER_URL.to_string(),
            top_k: search::DEFAULT_TOP_K,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file())
    }

    /// Load configuration from a specific path (missing file -> defaults)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Write configuration to the default location, creating the directory
    pub fn save(&self) -> Result<()> {
        let dir = paths::config_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(paths::config_file(), raw).context("failed to write config")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.server_url, ui::DEFAULT_SERVER_URL);
        assert_eq!(config.top_k, search::DEFAULT_TOP_K);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "server_url = \"http://papers.example:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server_url, "http://papers.example:9000");
        assert_eq!(config.top_k, search::DEFAULT_TOP_K);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "server_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
