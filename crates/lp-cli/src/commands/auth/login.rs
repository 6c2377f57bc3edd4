use lp_config::LaunchpadConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    expires_at: Option<String>,
    token_source: String,
    verified: bool,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    let token = args.token.trim();

    // With a secret key, refuse tokens Clerk does not recognise before storing.
    let verified = if config.clerk.is_configured() {
        lp_auth::jwks::validate(token, &config.clerk.secret_key).await?;
        true
    } else {
        tracing::warn!("LAUNCHPAD_CLERK__SECRET_KEY not set; storing token without verification");
        false
    };

    let (claims, source) = lp_auth::login(token)?;
    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: claims.user_id,
            expires_at: claims.expires_at.map(|at| at.to_rfc3339()),
            token_source: source.to_string(),
            verified,
        },
        flags.format,
    )
}
