//! Backend API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default per-stage request bound. Agent stages run LLM research and can
/// legitimately take minutes.
const fn default_stage_timeout_secs() -> u64 {
    600
}

/// Default bound for history lookups.
const fn default_retrieval_timeout_secs() -> u64 {
    10
}

/// Default bound for the health probe.
const fn default_health_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend base URL (e.g., `http://127.0.0.1:8000`).
    #[serde(default)]
    pub base_url: String,

    /// Per-request bound for each agent stage, in seconds. `0` disables it.
    #[serde(default = "default_stage_timeout_secs")]
    pub stage_timeout_secs: u64,

    /// Per-request bound for history list/detail lookups, in seconds. `0` disables it.
    #[serde(default = "default_retrieval_timeout_secs")]
    pub retrieval_timeout_secs: u64,

    /// Per-request bound for the `/health` probe, in seconds. `0` disables it.
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            stage_timeout_secs: default_stage_timeout_secs(),
            retrieval_timeout_secs: default_retrieval_timeout_secs(),
            health_timeout_secs: default_health_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default timeouts.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Check if a base URL has been provided.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// The base URL without surrounding whitespace or trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no URL is set, or
    /// [`ConfigError::InvalidValue`] when it is not an `http(s)://` URL.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::NotConfigured {
                field: "api.base_url".into(),
                hint: "set LAUNCHPAD_API__BASE_URL or NEXT_PUBLIC_API_URL".into(),
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http:// or https:// URL, got '{trimmed}'"),
            });
        }
        Ok(trimmed)
    }

    /// Bound for one stage request; `None` when disabled.
    #[must_use]
    pub const fn stage_timeout(&self) -> Option<Duration> {
        bound(self.stage_timeout_secs)
    }

    #[must_use]
    pub const fn retrieval_timeout(&self) -> Option<Duration> {
        bound(self.retrieval_timeout_secs)
    }

    #[must_use]
    pub const fn health_timeout(&self) -> Option<Duration> {
        bound(self.health_timeout_secs)
    }
}

/// `0` seconds means no bound.
const fn bound(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.stage_timeout(), Some(Duration::from_secs(600)));
        assert_eq!(config.retrieval_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.health_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn missing_base_url_is_not_configured() {
        let err = ApiConfig::default().base_url().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref field, .. } if field == "api.base_url"));
    }

    #[test]
    fn whitespace_base_url_is_not_configured() {
        let config = ApiConfig::with_base_url("   ");
        assert!(!config.is_configured());
        assert!(matches!(config.base_url(), Err(ConfigError::NotConfigured { .. })));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::with_base_url(" https://api.example.com// ");
        assert_eq!(config.base_url().unwrap(), "https://api.example.com");
    }

    #[test]
    fn non_http_url_is_invalid() {
        let config = ApiConfig::with_base_url("localhost:8000");
        assert!(matches!(config.base_url(), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn zero_disables_every_bound() {
        let config = ApiConfig {
            stage_timeout_secs: 0,
            retrieval_timeout_secs: 0,
            health_timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.stage_timeout().is_none());
        assert!(config.retrieval_timeout().is_none());
        assert!(config.health_timeout().is_none());
    }
}
