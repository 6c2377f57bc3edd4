use lp_config::LaunchpadConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::output::output;

pub fn handle(
    action: &ConfigCommands,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => output(&config.redacted(), flags.format),
    }
}
