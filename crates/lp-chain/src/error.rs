use std::fmt;

use lp_auth::AuthError;
use lp_client::{ClientError, ErrorKind};
use lp_core::{CoreError, Stage};
use serde::Serialize;
use thiserror::Error;

/// What the user should do about a [`ChainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Fix the idea or sign in.
    Input,
    /// Backend missing, down, or stalled.
    Unavailable,
    /// The backend answered but the stage did not succeed.
    RequestFailed,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "fix your input",
            Self::Unavailable => "system not reachable",
            Self::RequestFailed => "request failed",
        })
    }
}

#[derive(Debug, Error)]
pub enum ChainError {
    #[error(transparent)]
    InvalidIdea(#[from] CoreError),

    #[error("you must be signed in to use this feature; run `launchpad auth login`")]
    NotSignedIn,

    #[error("could not resolve the signed-in user")]
    Identity(#[source] AuthError),

    /// The first failing stage's error, unchanged.
    #[error("{} stage failed", stage.title())]
    Stage {
        stage: Stage,
        #[source]
        source: ClientError,
    },
}

impl From<AuthError> for ChainError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::NotSignedIn => Self::NotSignedIn,
            other => Self::Identity(other),
        }
    }
}

impl ChainError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdea(_) | Self::NotSignedIn | Self::Identity(_) => ErrorCategory::Input,
            Self::Stage { source, .. } => match source.kind() {
                ErrorKind::Configuration | ErrorKind::Unreachable | ErrorKind::Timeout => {
                    ErrorCategory::Unavailable
                }
                ErrorKind::Remote | ErrorKind::Malformed => ErrorCategory::RequestFailed,
            },
        }
    }

    /// The stage that failed, for stage errors.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The underlying client error, for stage errors.
    #[must_use]
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Stage { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_error(source: ClientError) -> ChainError {
        ChainError::Stage {
            stage: Stage::ProductRoadmap,
            source,
        }
    }

    #[test]
    fn input_errors() {
        let short = ChainError::from(CoreError::IdeaTooShort { length: 3, min: 10 });
        assert_eq!(short.category(), ErrorCategory::Input);
        assert_eq!(ChainError::NotSignedIn.category(), ErrorCategory::Input);
    }

    #[test]
    fn not_signed_in_auth_error_maps_to_variant() {
        assert!(matches!(
            ChainError::from(AuthError::NotSignedIn),
            ChainError::NotSignedIn
        ));
        assert!(matches!(
            ChainError::from(AuthError::TokenExpired),
            ChainError::Identity(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn transport_errors_are_unavailable() {
        let err = stage_error(ClientError::Timeout {
            url: "http://x/product-manager".into(),
            timeout: std::time::Duration::from_secs(600),
        });
        assert_eq!(err.category(), ErrorCategory::Unavailable);
        assert_eq!(err.category().to_string(), "system not reachable");
        assert_eq!(err.stage(), Some(Stage::ProductRoadmap));
    }

    #[test]
    fn backend_failures_are_request_failed() {
        let err = stage_error(ClientError::Remote {
            status: 500,
            status_text: "Internal Server Error".into(),
            detail: None,
        });
        assert_eq!(err.category(), ErrorCategory::RequestFailed);
        assert_eq!(err.to_string(), "Product Roadmap stage failed");
        assert!(err.client_error().is_some());
    }
}
