//! # lp-client
//!
//! HTTP client for the Launchpad agent backend.
//!
//! - Stage calls (`POST /market-analyst`, `/product-manager`,
//!   `/technical-architect`) behind the [`StageApi`] trait
//! - Retrieval of persisted outputs (`GET /outputs/user/{id}`,
//!   `POST /outputs/session`)
//! - A `GET /health` probe
//!
//! Every call is a single request: no retries, no caching. Failures are
//! classified into [`ErrorKind`]s so callers can tell a missing base URL from
//! an unreachable or stalled backend.

mod error;
mod health;
mod http;
mod outputs;
mod stages;

use std::time::Duration;

use lp_config::ApiConfig;

pub use error::{ClientError, ErrorKind};
pub use health::HealthStatus;
pub use stages::StageApi;

const USER_AGENT: &str = concat!("launchpad/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    stage_timeout: Option<Duration>,
    retrieval_timeout: Option<Duration>,
    health_timeout: Option<Duration>,
}

impl BackendClient {
    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] if the base URL is absent or
    /// not an http(s) URL. No request is made.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url()?.to_string();
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url,
            stage_timeout: config.stage_timeout(),
            retrieval_timeout: config.retrieval_timeout(),
            health_timeout: config.health_timeout(),
        })
    }

    /// The normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_a_configuration_error() {
        let err = BackendClient::new(&ApiConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn non_http_base_url_is_a_configuration_error() {
        let err = BackendClient::new(&ApiConfig::with_base_url("ftp://example.com")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = BackendClient::new(&ApiConfig::with_base_url("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
        assert_eq!(client.url("market-analyst"), "http://localhost:8000/market-analyst");
    }
}
