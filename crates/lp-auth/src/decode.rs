//! Signature-less JWT payload decoding.
//!
//! Used when no Clerk secret key is configured (local development against a
//! backend that trusts the caller's `user_id`). Never a substitute for
//! [`crate::jwks::validate`] when a key is available.

use base64::Engine as _;
use serde::Deserialize;

use crate::claims::UserClaims;
use crate::error::AuthError;

#[derive(Deserialize)]
struct Payload {
    sub: Option<String>,
    exp: Option<i64>,
}

/// Read `sub` and `exp` from a JWT without checking its signature.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token is not three dot-separated
/// segments, the payload is not base64url JSON, or `sub` is missing.
pub fn decode_unverified(jwt: &str) -> Result<UserClaims, AuthError> {
    let mut parts = jwt.trim().split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let payload: Payload = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;

    let user_id = payload
        .sub
        .filter(|sub| !sub.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("missing sub claim".into()))?;
    let expires_at = match payload.exp {
        Some(exp) => Some(
            chrono::DateTime::from_timestamp(exp, 0)
                .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?,
        ),
        None => None,
    };

    Ok(UserClaims {
        user_id,
        expires_at,
        verified: false,
    })
}

#[cfg(test)]
pub(crate) fn fake_jwt(payload_json: &str) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.{}",
        engine.encode(r#"{"alg":"RS256"}"#),
        engine.encode(payload_json),
        engine.encode("fake_sig")
    )
}
