//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/goose-test/` (or `$XDG_CONFIG_HOME/goose-test/`)
//! - macOS: `~/Library/Application Support/goose-test/`
//! - Windows: `%APPDATA%\goose-test\`

use std::path::PathBuf;

/// Application name used for platform directories
const APP_NAME: &str = "goose-test";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
