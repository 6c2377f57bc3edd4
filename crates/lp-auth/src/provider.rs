//! Run identity providers.
//!
//! The chain asks an [`IdentityProvider`] for the signed-in user and a fresh
//! session ID exactly once per run. [`ClerkIdentity`] reads the stored Clerk
//! token; [`StaticIdentity`] is a fixed answer for CI and tests.

use async_trait::async_trait;
use lp_config::LaunchpadConfig;
use lp_core::RunIdentity;

use crate::claims::UserClaims;
use crate::error::AuthError;
use crate::token_store::{self, TokenSource};

/// Tokens expiring within this window are treated as signed out.
const EXPIRY_BUFFER_SECS: i64 = 60;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The authenticated user's ID, or `None` when nobody is signed in.
    async fn current_user_id(&self) -> Result<Option<String>, AuthError>;

    /// Mint a session ID for a new run.
    fn mint_session_id(&self) -> String {
        lp_core::ids::mint_session_id()
    }
}

/// Resolve the identity for one run.
///
/// # Errors
///
/// Returns `AuthError::NotSignedIn` when the provider has no user, or the
/// provider's own error if resolving the user failed.
pub async fn begin_run<I>(provider: &I) -> Result<RunIdentity, AuthError>
where
    I: IdentityProvider + ?Sized,
{
    let user_id = provider
        .current_user_id()
        .await?
        .ok_or(AuthError::NotSignedIn)?;
    Ok(RunIdentity::new(user_id, provider.mint_session_id()))
}

/// Fixed identity.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user_id: Option<String>,
    session_id: Option<String>,
}

impl StaticIdentity {
    #[must_use]
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            session_id: None,
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Pin the session ID instead of minting a new one per run.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_user_id(&self) -> Result<Option<String>, AuthError> {
        Ok(self.user_id.clone())
    }

    fn mint_session_id(&self) -> String {
        self.session_id
            .clone()
            .unwrap_or_else(lp_core::ids::mint_session_id)
    }
}

/// Identity backed by a stored Clerk session token.
///
/// Resolution order: the `auth.user_id` override, then the stored token
/// validated via JWKS when `clerk.secret_key` is set, then the token's
/// unverified `sub` claim.
#[derive(Debug, Clone, Default)]
pub struct ClerkIdentity {
    user_override: Option<String>,
    secret_key: Option<String>,
    token: Option<(String, TokenSource)>,
}

impl ClerkIdentity {
    /// Build from configuration, loading the token from the token store.
    #[must_use]
    pub fn from_config(config: &LaunchpadConfig) -> Self {
        Self::new(config, token_store::load())
    }

    /// Build from configuration with an explicit token.
    #[must_use]
    pub fn new(config: &LaunchpadConfig, token: Option<(String, TokenSource)>) -> Self {
        Self {
            user_override: config.auth.user_id().map(str::to_string),
            secret_key: config
                .clerk
                .is_configured()
                .then(|| config.clerk.secret_key.clone()),
            token,
        }
    }

    /// Where the token came from, if one was found.
    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        self.token.as_ref().map(|(_, source)| *source)
    }

    /// `true` when a configured user ID bypasses the token.
    #[must_use]
    pub const fn has_override(&self) -> bool {
        self.user_override.is_some()
    }

    /// Claims from the stored token, or `None` without a token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::JwksValidation` or `AuthError::InvalidToken` if
    /// the token cannot be validated or decoded.
    pub async fn claims(&self) -> Result<Option<UserClaims>, AuthError> {
        let Some((jwt, _)) = &self.token else {
            return Ok(None);
        };
        let claims = match &self.secret_key {
            Some(secret_key) => crate::jwks::validate(jwt, secret_key).await?,
            None => {
                tracing::debug!("no clerk secret key configured; reading token unverified");
                crate::decode::decode_unverified(jwt)?
            }
        };
        Ok(Some(claims))
    }
}

#[async_trait]
impl IdentityProvider for ClerkIdentity {
    async fn current_user_id(&self) -> Result<Option<String>, AuthError> {
        if let Some(user_id) = &self.user_override {
            return Ok(Some(user_id.clone()));
        }
        let Some(claims) = self.claims().await? else {
            return Ok(None);
        };
        if claims.is_near_expiry(EXPIRY_BUFFER_SECS) {
            tracing::warn!(
                expires_at = ?claims.expires_at,
                "session token expires within {EXPIRY_BUFFER_SECS}s; sign in again",
            );
            return Ok(None);
        }
        Ok(Some(claims.user_id))
    }
}
