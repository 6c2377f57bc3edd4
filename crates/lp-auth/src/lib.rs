//! # lp-auth
//!
//! Sign-in state for the Launchpad CLI.
//!
//! Stores the Clerk session token (OS keychain via `keyring`, env var, or a
//! 0600 credentials file), validates it through Clerk JWKS (`clerk-rs`) when a
//! secret key is configured, and turns it into the [`RunIdentity`] each chain
//! run is correlated by.
//!
//! [`RunIdentity`]: lp_core::RunIdentity

pub mod claims;
pub mod decode;
pub mod error;
pub mod jwks;
pub mod provider;
pub mod token_store;

pub use claims::UserClaims;
pub use error::AuthError;
pub use provider::{ClerkIdentity, IdentityProvider, StaticIdentity, begin_run};
pub use token_store::TokenSource;

/// Save a session token for later runs.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token cannot be decoded, or
/// `AuthError::TokenStore` if it cannot be persisted.
pub fn login(jwt: &str) -> Result<(UserClaims, TokenSource), AuthError> {
    let claims = decode::decode_unverified(jwt)?;
    if claims.is_near_expiry(0) {
        return Err(AuthError::TokenExpired);
    }
    let source = token_store::store(jwt)?;
    Ok((claims, source))
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
