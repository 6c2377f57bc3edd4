use lp_config::LaunchpadConfig;

use crate::cli::GlobalFlags;
use crate::commands::shared::backend;
use crate::output::output;

/// Handle `launchpad health`. Prints the probe result, then fails if the
/// backend did not answer.
pub async fn handle(flags: &GlobalFlags, config: &LaunchpadConfig) -> anyhow::Result<()> {
    let status = backend(config)?.health().await;
    output(&status, flags.format)?;
    if !status.reachable {
        anyhow::bail!("backend at {} is not reachable", status.url);
    }
    Ok(())
}
