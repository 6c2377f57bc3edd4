use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Store a Clerk session token.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current sign-in status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Clerk session token (JWT) copied from the web app.
    #[arg(long)]
    pub token: String,
}
