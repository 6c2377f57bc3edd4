use lp_auth::ClerkIdentity;
use lp_config::LaunchpadConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize, Default)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    verified: bool,
    note: Option<String>,
}

pub async fn handle(flags: &GlobalFlags, config: &LaunchpadConfig) -> anyhow::Result<()> {
    let identity = ClerkIdentity::from_config(config);
    let status = status(&identity, config).await;
    output(&status, flags.format)
}

async fn status(identity: &ClerkIdentity, config: &LaunchpadConfig) -> AuthStatusResponse {
    if let Some(user_id) = config.auth.user_id() {
        return AuthStatusResponse {
            authenticated: true,
            user_id: Some(user_id.to_string()),
            token_source: Some("config".into()),
            note: Some("user ID set by LAUNCHPAD_AUTH__USER_ID".into()),
            ..AuthStatusResponse::default()
        };
    }

    let token_source = identity.token_source().map(|source| source.to_string());
    match identity.claims().await {
        Ok(Some(claims)) => {
            let expired = claims.is_near_expiry(0);
            AuthStatusResponse {
                authenticated: !expired,
                user_id: Some(claims.user_id),
                expires_at: claims.expires_at.map(|at| at.to_rfc3339()),
                token_source,
                verified: claims.verified,
                note: expired.then(|| "token expired; run `launchpad auth login`".into()),
            }
        }
        Ok(None) => AuthStatusResponse {
            note: Some("not signed in".into()),
            ..AuthStatusResponse::default()
        },
        Err(error) => AuthStatusResponse {
            token_source,
            note: Some(format!("token rejected: {error}")),
            ..AuthStatusResponse::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use lp_auth::TokenSource;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn config_override_counts_as_signed_in() {
        let mut config = LaunchpadConfig::default();
        config.auth.user_id = Some("user_ci".into());
        let identity = ClerkIdentity::new(&config, None);

        let status = status(&identity, &config).await;
        assert!(status.authenticated);
        assert_eq!(status.user_id.as_deref(), Some("user_ci"));
        assert_eq!(status.token_source.as_deref(), Some("config"));
    }

    #[tokio::test]
    async fn missing_token_is_not_signed_in() {
        let config = LaunchpadConfig::default();
        let identity = ClerkIdentity::new(&config, None);

        let status = status(&identity, &config).await;
        assert!(!status.authenticated);
        assert_eq!(status.note.as_deref(), Some("not signed in"));
    }

    #[tokio::test]
    async fn garbage_token_is_reported_not_fatal() {
        let config = LaunchpadConfig::default();
        let identity = ClerkIdentity::new(&config, Some(("not-a-jwt".into(), TokenSource::Env)));

        let status = status(&identity, &config).await;
        assert!(!status.authenticated);
        assert_eq!(status.token_source.as_deref(), Some("env"));
        assert!(status.note.is_some_and(|note| note.starts_with("token rejected")));
    }
}
