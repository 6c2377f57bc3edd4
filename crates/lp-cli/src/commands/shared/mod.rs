use anyhow::Context;
use lp_auth::{ClerkIdentity, IdentityProvider};
use lp_chain::ChainError;
use lp_client::BackendClient;
use lp_config::LaunchpadConfig;

/// Backend client for the configured base URL.
pub fn backend(config: &LaunchpadConfig) -> anyhow::Result<BackendClient> {
    Ok(BackendClient::new(&config.api)?)
}

/// The signed-in user's ID, failing the same way a build does when nobody is.
pub async fn signed_in_user(config: &LaunchpadConfig) -> anyhow::Result<String> {
    let identity = ClerkIdentity::from_config(config);
    let user_id = identity
        .current_user_id()
        .await
        .map_err(ChainError::from)
        .context("failed to resolve the signed-in user")?;
    user_id.ok_or_else(|| ChainError::NotSignedIn.into())
}

/// Row limit: the `--limit` flag, else the configured default.
pub fn effective_limit(flag: Option<u32>, config: &LaunchpadConfig) -> usize {
    flag.unwrap_or(config.history.limit) as usize
}

#[cfg(test)]
mod tests {
    use lp_config::LaunchpadConfig;

    use super::effective_limit;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), &LaunchpadConfig::default()), 5);
    }

    #[test]
    fn config_default_used_when_flag_missing() {
        let mut config = LaunchpadConfig::default();
        config.history.limit = 3;
        assert_eq!(effective_limit(None, &config), 3);
    }
}
