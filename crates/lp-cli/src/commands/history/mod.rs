mod list;
mod show;

use lp_config::LaunchpadConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;

/// Handle `launchpad history <subcommand>`.
pub async fn handle(
    action: &HistoryCommands,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List(args) => list::handle(args, flags, config).await,
        HistoryCommands::Show(args) => show::handle(args, flags, config).await,
    }
}
