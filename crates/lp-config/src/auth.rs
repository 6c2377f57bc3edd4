//! Identity overrides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Fixed user ID for CI and headless runs. Takes precedence over any
    /// stored login token.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AuthConfig {
    /// The configured user ID, ignoring blank values.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
