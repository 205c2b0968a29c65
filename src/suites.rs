//! Live test suites
//!
//! Each suite is a package directory of the goose checkout. Live tests
//! talk to a real OpenStack deployment, so every suite is run from inside
//! its own directory with `go test -live`.

use std::io;
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};
use crate::toolchain::{CommandRunner, Invocation};

/// Suites exercised by a live run, in run order
pub const LIVE_SUITES: [&str; 6] = ["client", "glance", "identity", "nova", "neutron", "swift"];

/// Working directory change that is undone when the guard goes away
///
/// Restoration happens in [`WorkdirGuard::restore`] when the caller wants
/// to see the error, and in `Drop` on every other path.
#[derive(Debug)]
pub struct WorkdirGuard {
    original: Option<PathBuf>,
}

impl WorkdirGuard {
    /// Change into `dir`, remembering the current directory
    ///
    /// On failure the working directory is unchanged.
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let original = std::env::current_dir()?;
        std::env::set_current_dir(dir)?;
        Ok(Self {
            original: Some(original),
        })
    }

    /// Directory that will be restored
    pub fn original(&self) -> Option<&Path> {
        self.original.as_deref()
    }

    /// Go back to the original directory now
    pub fn restore(mut self) -> Result<()> {
        match self.original.take() {
            Some(path) => std::env::set_current_dir(&path)
                .map_err(|source| Error::RestoreDirectory { path, source }),
            None => Ok(()),
        }
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Some(path) = self.original.take() {
            if let Err(e) = std::env::set_current_dir(&path) {
                tracing::error!("Failed to restore working directory {}: {}", path.display(), e);
            }
        }
    }
}

/// Run the live tests of every suite
///
/// All suites run even after a failure. The result is the exit code of the
/// last suite that failed, or 0 if none did. A suite directory that cannot
/// be entered aborts the run with an error.
pub async fn run_live_suites<R>(runner: &mut R, suites: &[&str]) -> Result<i32>
where
    R: CommandRunner + ?Sized,
{
    let invocation = Invocation::live_test();
    let mut final_code = 0;

    for suite in suites {
        tracing::info!("Running: {} in {}", invocation.display(), suite);

        let guard =
            WorkdirGuard::enter(Path::new(suite)).map_err(|e| Error::suite_directory(suite, e))?;
        let code = runner.run(&invocation).await?;
        guard.restore()?;

        if code != 0 {
            tracing::error!("Live tests failed in {suite}");
            final_code = code;
        }
    }

    Ok(final_code)
}
