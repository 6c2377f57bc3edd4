//! Session ID minting.
//!
//! Session IDs look like `session_1718000000000_a3f9`: the creation time in
//! Unix milliseconds plus a short random suffix so two runs started in the
//! same millisecond still get distinct IDs. They are meant to be readable in
//! logs, not unguessable.

use chrono::{DateTime, Utc};

/// Prefix shared by every minted session ID.
pub const SESSION_PREFIX: &str = "session_";

/// Mint a new session ID for a run started now.
#[must_use]
pub fn mint_session_id() -> String {
    mint_session_id_at(Utc::now())
}

/// Mint a session ID for a run started at `now`.
#[must_use]
pub fn mint_session_id_at(now: DateTime<Utc>) -> String {
    format_session_id(now.timestamp_millis(), random_suffix())
}

/// Format a session ID from its parts.
#[must_use]
pub fn format_session_id(unix_millis: i64, suffix: u16) -> String {
    format!("{SESSION_PREFIX}{unix_millis}_{suffix:04x}")
}

/// Whether `value` has the shape produced by [`format_session_id`].
#[must_use]
pub fn is_session_id(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(SESSION_PREFIX) else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('_') else {
        return false;
    };
    !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == 4
        && suffix.chars().all(|c| c.is_ascii_hexdigit())
}

fn random_suffix() -> u16 {
    let mut bytes = [0u8; 2];
    if getrandom::fill(&mut bytes).is_err() {
        // OS entropy unavailable: fall back to the clock's sub-millisecond part.
        let nanos = Utc::now().timestamp_subsec_nanos();
        return u16::try_from(nanos % 65_536).unwrap_or_default();
    }
    u16::from_le_bytes(bytes)
}
