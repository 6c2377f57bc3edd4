use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ConfigCommands, HistoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run market analysis, product roadmap and technical blueprint for an idea.
    Build(BuildArgs),
    /// Browse previously generated blueprints.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Print the architecture diagram source stored for a session.
    Diagram(DiagramArgs),
    /// Probe the backend.
    Health,
    /// Sign-in management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Inspect effective configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// The startup idea; unquoted words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Also write the full result as JSON to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl BuildArgs {
    pub fn idea(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct DiagramArgs {
    /// Session ID of a completed build.
    pub session_id: String,
}
