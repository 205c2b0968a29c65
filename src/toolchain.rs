//! Go toolchain invocation
//!
//! Commands run with inherited stdio so the toolchain's own output reaches
//! the terminal; only the exit code is interpreted.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::common::{Error, Result};
use crate::gopath::{SearchPath, GOPATH_VAR};

/// A toolchain command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Subcommand and flags passed to `go`
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from `go` arguments
    pub fn go<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `go test -v -live -check.v`
    pub fn live_test() -> Self {
        Self::go(["test", "-v", "-live", "-check.v"])
    }

    /// `go get -u -x <namespace>/...`
    pub fn update(namespace: &str) -> Self {
        Self::go([
            "get".to_string(),
            "-u".to_string(),
            "-x".to_string(),
            format!("{namespace}/..."),
        ])
    }

    /// Command line as shown in diagnostics
    pub fn display(&self) -> String {
        std::iter::once("go")
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs toolchain invocations in the current working directory
#[async_trait]
pub trait CommandRunner: Send {
    /// Run to completion and return the exit code
    async fn run(&mut self, invocation: &Invocation) -> Result<i32>;
}

/// The real Go toolchain
#[derive(Debug, Clone)]
pub struct Toolchain {
    go: PathBuf,
    search_path: SearchPath,
}

impl Toolchain {
    pub fn new(go: PathBuf, search_path: SearchPath) -> Self {
        Self { go, search_path }
    }

    /// Path of the `go` executable
    pub fn go(&self) -> &PathBuf {
        &self.go
    }

    /// GOPATH handling applied to every child
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&self.go);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(gopath) = self.search_path.gopath() {
            cmd.env(GOPATH_VAR, gopath);
        }
        cmd
    }
}

#[async_trait]
impl CommandRunner for Toolchain {
    async fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        tracing::debug!("Spawning {} {:?}", self.go.display(), invocation.args);
        let status = self
            .command(invocation)
            .status()
            .await
            .map_err(|e| Error::spawn_failed(&self.go.display().to_string(), e))?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished child
///
/// On Unix a child killed by a signal reports the negated signal number.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    1
}
