use chrono::{DateTime, Utc};

/// Claims read from a stored Clerk session token.
#[derive(Debug, Clone)]
pub struct UserClaims {
    /// Clerk user ID (`sub` claim).
    pub user_id: String,
    /// Token expiration time (`exp` claim), when the token carries one.
    pub expires_at: Option<DateTime<Utc>>,
    /// `true` when the signature was checked against Clerk's JWKS.
    pub verified: bool,
}

impl UserClaims {
    /// Check if the token is expired or expires within `buffer_secs`.
    ///
    /// Tokens without an `exp` claim never count as expiring.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at.is_some_and(|exp| exp <= threshold)
    }
}
