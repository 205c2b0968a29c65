//! Dependency refresh
//!
//! Pulls the latest revision of a dependency namespace with `go get -u`.
//! This can overwrite the goose checkout itself if it sits under the same
//! GOPATH entry, so it is not part of the default run.

use crate::common::Result;
use crate::toolchain::{CommandRunner, Invocation};

/// Import path prefix of juju-core and its dependencies
pub const JUJU_NAMESPACE: &str = "github.com/juju";

/// Update every package under `namespace`
///
/// A failed update is logged and otherwise ignored. Only a toolchain that
/// cannot be started at all is reported as an error.
pub async fn refresh_dependencies<R>(runner: &mut R, namespace: &str) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    let invocation = Invocation::update(namespace);
    tracing::info!("Running: {}", invocation.display());

    let code = runner.run(&invocation).await?;
    if code != 0 {
        tracing::warn!("Failed to update {namespace}");
    }
    Ok(())
}
