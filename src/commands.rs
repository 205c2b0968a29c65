//! CLI argument definitions
//!
//! Defines the clap parser for the goose test runner.

use clap::Parser;

/// Run the goose test suite
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "goose-test", about = "Run the goose test suite")]
#[command(version = "0.1", long_about = None)]
pub struct Cli {
    /// Be chatty
    #[arg(long)]
    pub verbose: bool,

    /// Run the juju-core trunk tests as well as the goose tests
    #[arg(long = "juju-core")]
    pub juju_core: bool,

    /// Run tests against a live service
    #[arg(long)]
    pub live: bool,
}

/// Top-level step of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Live tests of every known suite
    LiveSuites,
}

impl Cli {
    /// Steps requested by the flags, in execution order
    ///
    /// `--juju-core` is accepted but does not schedule anything yet.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.live {
            actions.push(Action::LiveSuites);
        }
        actions
    }
}
