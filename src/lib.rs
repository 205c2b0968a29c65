//! goose test runner
//!
//! Runs the unit and live test suites of the goose OpenStack client with
//! the Go toolchain, pointing GOPATH at the checkout under test.

pub mod cli;
pub mod commands;
pub mod common;
pub mod gopath;
pub mod refresh;
pub mod suites;
pub mod toolchain;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use gopath::SearchPath;
