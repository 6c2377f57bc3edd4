use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "launchpad-cli";
const KEYRING_USER: &str = "clerk-session";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Environment variable consulted after the keyring.
pub const TOKEN_ENV: &str = "LAUNCHPAD_AUTH__TOKEN";

/// Where a stored session token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        })
    }
}

/// Keyring service name; `LAUNCHPAD_KEYRING_SERVICE` overrides it so tests
/// never touch real credentials.
fn keyring_service() -> String {
    std::env::var("LAUNCHPAD_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

fn keyring_entry() -> Option<keyring::Entry> {
    keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()
}

/// Store a session token in the OS keychain, falling back to the
/// credentials file when the keychain is unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if both keyring and file storage fail.
pub fn store(jwt: &str) -> Result<TokenSource, AuthError> {
    let jwt = jwt.trim();
    if jwt.is_empty() {
        return Err(AuthError::TokenStore("refusing to store an empty token".into()));
    }

    match keyring_entry().map(|entry| entry.set_password(jwt)) {
        Some(Ok(())) => return Ok(TokenSource::Keyring),
        Some(Err(error)) => tracing::warn!(%error, "keyring store failed; falling back to file"),
        None => tracing::warn!("keyring unavailable; falling back to file"),
    }

    write_credentials(&credentials_path()?, jwt)?;
    Ok(TokenSource::File)
}

/// Load the session token. Priority: keyring, then `LAUNCHPAD_AUTH__TOKEN`,
/// then `~/.launchpad/credentials`.
#[must_use]
pub fn load() -> Option<(String, TokenSource)> {
    if let Some(entry) = keyring_entry()
        && let Ok(token) = entry.get_password()
        && !token.trim().is_empty()
    {
        return Some((token.trim().to_string(), TokenSource::Keyring));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some((token.trim().to_string(), TokenSource::Env));
    }

    let path = credentials_path().ok()?;
    read_credentials(&path).map(|token| (token, TokenSource::File))
}

/// Remove stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // A missing keyring entry is not an error.
    if let Some(entry) = keyring_entry() {
        let _ = entry.delete_credential();
    }

    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|home| home.join(".launchpad").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| AuthError::TokenStore("home directory not found".into()))
}

fn write_credentials(path: &Path, jwt: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }

    fs::write(path, jwt)
        .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
    }
    Ok(())
}

fn read_credentials(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
