mod auth;
mod build;
mod config;
mod diagram;
mod health;
mod history;
mod shared;

use lp_config::LaunchpadConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Build(args) => build::handle(&args, flags, config).await,
        Commands::History { action } => history::handle(&action, flags, config).await,
        Commands::Diagram(args) => diagram::handle(&args, flags, config).await,
        Commands::Health => health::handle(flags, config).await,
        Commands::Auth { action } => auth::handle(&action, flags, config).await,
        Commands::Config { action } => config::handle(&action, flags, config),
    }
}
