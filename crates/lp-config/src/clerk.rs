//! Clerk authentication configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Clerk publishable key.
    #[serde(default)]
    pub publishable_key: String,

    /// Clerk secret key, used to fetch JWKS for token validation.
    #[serde(default)]
    pub secret_key: String,
}

impl ClerkConfig {
    /// `true` when stored tokens are verified against Clerk JWKS rather than
    /// decoded unverified.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }
}
