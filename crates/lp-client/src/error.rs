//! Backend client error types.

use std::fmt;
use std::time::Duration;

use lp_config::ConfigError;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a [`ClientError`], one per failure mode the
/// caller can act on differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or invalid backend settings; no request was sent.
    Configuration,
    /// Connection or DNS failure.
    Unreachable,
    /// The backend did not answer within the bound.
    Timeout,
    /// The backend answered with a non-2xx status.
    Remote,
    /// The backend answered 2xx with an unusable body.
    Malformed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configuration => "configuration",
            Self::Unreachable => "unreachable",
            Self::Timeout => "timeout",
            Self::Remote => "remote",
            Self::Malformed => "malformed",
        })
    }
}

/// Errors from calls to the agent backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend base URL is absent or invalid.
    #[error("backend not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection refused, DNS failure, or the connection dropped mid-response.
    #[error("backend unreachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response within the configured bound.
    #[error("no response from {url} within {}s", timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    /// Non-success status from the backend.
    #[error(
        "backend returned {status} {status_text}{}",
        detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
    )]
    Remote {
        status: u16,
        status_text: String,
        /// FastAPI `detail` message or plain-text body, when present.
        detail: Option<String>,
    },

    /// 2xx response that is not valid JSON or fails structural validation.
    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured(_) | Self::Build(_) => ErrorKind::Configuration,
            Self::Unreachable { .. } => ErrorKind::Unreachable,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Remote { .. } => ErrorKind::Remote,
            Self::Malformed { .. } => ErrorKind::Malformed,
        }
    }

    /// Troubleshooting steps for the user, one per line.
    #[must_use]
    pub fn guidance(&self) -> &'static [&'static str] {
        match self.kind() {
            ErrorKind::Configuration => &[
                "Set the backend URL with LAUNCHPAD_API__BASE_URL or NEXT_PUBLIC_API_URL",
                "Or add `base_url` under [api] in .launchpad/config.toml",
            ],
            ErrorKind::Unreachable => &[
                "Check that the backend server is running",
                "Verify the backend URL (`launchpad config show`)",
                "Run `launchpad health` to probe the backend",
            ],
            ErrorKind::Timeout => &[
                "The backend is running slowly or is stalled",
                "Try again in a few moments",
                "Raise api.stage_timeout_secs or api.retrieval_timeout_secs if this persists",
            ],
            ErrorKind::Remote => match self {
                Self::Remote { status, .. } if *status >= 500 => &[
                    "The backend hit an internal error; check its logs",
                    "Try again in a few moments",
                ],
                _ => &["The backend rejected the request; check the message above"],
            },
            ErrorKind::Malformed => &[
                "The backend returned data this client does not understand",
                "Check that the backend version matches this client",
            ],
        }
    }
}
