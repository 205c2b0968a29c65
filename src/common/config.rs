//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Go toolchain settings
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

/// Go toolchain settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ToolchainConfig {
    /// Explicit path to the `go` executable
    pub go: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }

    /// Resolve the `go` executable
    ///
    /// Explicit configuration wins, then a PATH search, then the bare name
    /// so that a missing toolchain surfaces as a spawn error.
    pub fn go_binary(&self) -> PathBuf {
        if let Some(path) = &self.toolchain.go {
            return path.clone();
        }
        which::which("go").unwrap_or_else(|_| PathBuf::from("go"))
    }
}
