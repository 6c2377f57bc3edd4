use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("you must be signed in to use this feature; run `launchpad auth login`")]
    NotSignedIn,

    #[error("token expired; run `launchpad auth login` with a fresh token")]
    TokenExpired,

    #[error("JWKS validation failed: {0}")]
    JwksValidation(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token store error: {0}")]
    TokenStore(String),
}
