//! Defaults for `launchpad history`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Rows shown by `history list` when `--limit` is absent.
    #[serde(default = "HistoryConfig::default_limit")]
    pub limit: u32,
}

impl HistoryConfig {
    const fn default_limit() -> u32 {
        20
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
        }
    }
}
