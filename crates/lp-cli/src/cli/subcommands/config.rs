use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration with secrets redacted.
    Show,
}
