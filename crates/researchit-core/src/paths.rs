//! Filesystem paths for configuration and logs
//!
//! Everything lives under `~/.researchit` so the app leaves no stray files.

use std::path::PathBuf;

use crate::constants::ui::CONFIG_DIR_NAME;

/// Root configuration directory (`~/.researchit`)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to the config file (`~/.researchit/config.toml`)
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Directory for log files (`~/.researchit/logs`)
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
