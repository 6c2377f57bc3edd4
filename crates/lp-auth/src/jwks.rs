use std::sync::{Arc, OnceLock};

use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use crate::claims::UserClaims;
use crate::error::AuthError;

/// Process-scoped JWKS provider, bound to the first secret key it sees.
/// The provider caches Clerk's public keys for an hour.
static JWKS_PROVIDER: OnceLock<Arc<MemoryCacheJwksProvider>> = OnceLock::new();

fn provider_for(secret_key: &str) -> Arc<MemoryCacheJwksProvider> {
    JWKS_PROVIDER
        .get_or_init(|| {
            let config = ClerkConfiguration::new(None, None, Some(secret_key.to_string()), None);
            Arc::new(MemoryCacheJwksProvider::new(Clerk::new(config)))
        })
        .clone()
}

/// Validate a Clerk session token against the instance's JWKS.
///
/// # Errors
///
/// Returns `AuthError::JwksValidation` if the token is invalid, expired,
/// or the JWKS endpoint is unreachable.
pub async fn validate(jwt: &str, secret_key: &str) -> Result<UserClaims, AuthError> {
    let clerk_jwt = validate_jwt(jwt, provider_for(secret_key))
        .await
        .map_err(|e| AuthError::JwksValidation(e.to_string()))?;

    let expires_at = chrono::DateTime::from_timestamp(i64::from(clerk_jwt.exp), 0)
        .ok_or_else(|| AuthError::JwksValidation("invalid exp timestamp".into()))?;

    Ok(UserClaims {
        user_id: clerk_jwt.sub,
        expires_at: Some(expires_at),
        verified: true,
    })
}
