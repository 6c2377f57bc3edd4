use clap::{Args, Subcommand, ValueEnum};
use lp_core::Stage;

/// History commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List past builds for the signed-in user.
    List(HistoryListArgs),
    /// Show the stored output of one build.
    Show(HistoryShowArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HistoryListArgs {
    /// Only builds whose idea contains this text (case-insensitive).
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryShowArgs {
    pub session_id: String,

    /// Only this stage's response.
    #[arg(long)]
    pub stage: Option<StageArg>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StageArg {
    Market,
    Roadmap,
    Blueprint,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Market => Self::MarketAnalysis,
            StageArg::Roadmap => Self::ProductRoadmap,
            StageArg::Blueprint => Self::TechBlueprint,
        }
    }
}
