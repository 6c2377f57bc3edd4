use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `(user_id, session_id)` pair correlating one chain run end-to-end.
///
/// Created once per build invocation by an identity provider (see `lp-auth`)
/// and never reused across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RunIdentity {
    /// Opaque authenticated user ID (Clerk `sub` claim).
    pub user_id: String,
    /// Per-run session ID, see [`crate::ids::mint_session_id`].
    pub session_id: String,
}

impl RunIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: session_id.into(),
        }
    }
}
