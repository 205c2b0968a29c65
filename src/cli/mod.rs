//! CLI command handling
//!
//! Turns parsed flags into toolchain runs and reduces them to an exit code.

use crate::commands::{Action, Cli};
use crate::common::config::Config;
use crate::common::Result;
use crate::gopath::SearchPath;
use crate::suites::{run_live_suites, LIVE_SUITES};
use crate::toolchain::{CommandRunner, Toolchain};

/// Run everything the command line asks for
///
/// GOPATH discovery always happens, even when no action is requested. The
/// config file is only read once there is something to run.
pub async fn dispatch(cli: &Cli) -> Result<i32> {
    let search_path = SearchPath::from_env()?;

    let actions = cli.actions();
    if actions.is_empty() {
        return Ok(0);
    }

    let config = Config::load()?;
    let mut toolchain = Toolchain::new(config.go_binary(), search_path);
    tracing::debug!(
        "Using {} (GOPATH override: {:?})",
        toolchain.go().display(),
        toolchain.search_path().gopath()
    );

    execute(&actions, &mut toolchain).await
}

/// Run actions in order, stopping at the first one that fails
pub async fn execute<R>(actions: &[Action], runner: &mut R) -> Result<i32>
where
    R: CommandRunner + ?Sized,
{
    for action in actions {
        let code = match action {
            Action::LiveSuites => run_live_suites(runner, &LIVE_SUITES).await?,
        };
        if code != 0 {
            return Ok(code);
        }
    }
    Ok(0)
}
