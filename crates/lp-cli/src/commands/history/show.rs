use lp_config::LaunchpadConfig;
use lp_core::Stage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryShowArgs;
use crate::commands::shared::backend;
use crate::output::output;

pub async fn handle(
    args: &HistoryShowArgs,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    let stored = backend(config)?.get_output(&args.session_id).await?;

    match args.stage {
        Some(stage) => {
            let stage = Stage::from(stage);
            let response = stored.response(stage);
            if response.is_null() {
                anyhow::bail!(
                    "session {} has no stored {} output",
                    args.session_id,
                    stage.title()
                );
            }
            output(response, flags.format)
        }
        None => output(&stored, flags.format),
    }
}
