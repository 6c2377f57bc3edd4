mod auth;
mod config;
mod history;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use config::ConfigCommands;
pub use history::{HistoryCommands, HistoryListArgs, HistoryShowArgs, StageArg};
