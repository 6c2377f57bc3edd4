//! Troubleshooting lines printed under a failed command.

use lp_auth::AuthError;
use lp_chain::ChainError;
use lp_client::ClientError;
use lp_config::ConfigError;

const LOGIN_HINT: &str = "Sign in with `launchpad auth login --token <jwt>`, or set LAUNCHPAD_AUTH__USER_ID";

/// Guidance for the first error in the chain that has any.
pub fn guidance(error: &anyhow::Error) -> Vec<String> {
    for cause in error.chain() {
        if let Some(chain) = cause.downcast_ref::<ChainError>() {
            let mut lines = vec![format!("Category: {}", chain.category())];
            match chain {
                ChainError::InvalidIdea(_) => {
                    lines.push("Describe the idea in at least a few words".to_string());
                }
                ChainError::NotSignedIn => lines.push(LOGIN_HINT.to_string()),
                ChainError::Identity(_) => lines.push(
                    "Your stored token could not be validated; sign in again".to_string(),
                ),
                ChainError::Stage { source, .. } => {
                    lines.extend(source.guidance().iter().map(ToString::to_string));
                }
            }
            return lines;
        }
        if let Some(client) = cause.downcast_ref::<ClientError>() {
            return client.guidance().iter().map(ToString::to_string).collect();
        }
        if let Some(auth) = cause.downcast_ref::<AuthError>() {
            return match auth {
                AuthError::NotSignedIn | AuthError::TokenExpired => vec![LOGIN_HINT.to_string()],
                _ => Vec::new(),
            };
        }
        if let Some(ConfigError::NotConfigured { hint, .. }) = cause.downcast_ref::<ConfigError>() {
            return vec![hint.clone()];
        }
    }
    Vec::new()
}
