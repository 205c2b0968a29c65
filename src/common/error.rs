//! Error types for the goose test runner
//!
//! Failing tests are not errors: a suite that exits non-zero is reported
//! through its exit code. These variants cover the conditions that stop
//! the run outright, such as a missing suite directory or a toolchain that
//! cannot be spawned.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the goose test runner
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Working Directory Errors ===
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Cannot enter suite directory '{suite}': {source}")]
    SuiteDirectory {
        suite: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot restore working directory '{}': {source}", .path.display())]
    RestoreDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Toolchain Errors ===
    #[error("Failed to run '{program}': {source}. Is the Go toolchain installed?")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a suite directory error
    pub fn suite_directory(suite: &str, source: io::Error) -> Self {
        Self::SuiteDirectory {
            suite: suite.to_string(),
            source,
        }
    }

    /// Create a spawn failure error for the given program
    pub fn spawn_failed(program: &str, source: io::Error) -> Self {
        Self::SpawnFailed {
            program: program.to_string(),
            source,
        }
    }

    /// Process exit code reported when the run aborts with this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}
