use lp_config::LaunchpadConfig;
use lp_core::diagram::strip_code_fences;
use serde::Serialize;

use crate::cli::root_commands::DiagramArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::backend;
use crate::output::output;

#[derive(Serialize)]
struct DiagramResponse {
    session_id: String,
    diagram: String,
}

/// Handle `launchpad diagram <session-id>`.
///
/// Table and raw formats print the bare diagram source so it can be piped
/// into a Mermaid renderer.
pub async fn handle(
    args: &DiagramArgs,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    let stored = backend(config)?.get_output(&args.session_id).await?;
    let Some(source) = stored.architecture_diagram() else {
        anyhow::bail!("no architecture diagram stored for session {}", args.session_id);
    };
    let diagram = strip_code_fences(source);

    match flags.format {
        OutputFormat::Json => output(
            &DiagramResponse {
                session_id: stored.session_id,
                diagram,
            },
            flags.format,
        ),
        OutputFormat::Table | OutputFormat::Raw => {
            println!("{diagram}");
            Ok(())
        }
    }
}
