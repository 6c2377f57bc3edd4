//! Shared request and response helpers.
//!
//! Every backend call goes through [`send`], [`check_response`] and
//! [`read_json`] so transport failures, non-2xx statuses and unusable bodies
//! are classified the same way for stage, retrieval and health calls.

use std::time::Duration;

use serde_json::Value;

use crate::error::ClientError;

/// Longest plain-text error body carried into [`ClientError::Remote`].
const MAX_DETAIL_CHARS: usize = 300;

/// Send a request with an optional per-request bound.
pub async fn send(
    request: reqwest::RequestBuilder,
    url: &str,
    timeout: Option<Duration>,
) -> Result<reqwest::Response, ClientError> {
    bounded(request, timeout)
        .send()
        .await
        .map_err(|error| transport_error(error, url, timeout))
}

/// Apply `timeout` to the request; `None` leaves it unbounded.
fn bounded(request: reqwest::RequestBuilder, timeout: Option<Duration>) -> reqwest::RequestBuilder {
    match timeout {
        Some(timeout) => request.timeout(timeout),
        None => request,
    }
}

/// Map a non-success status to [`ClientError::Remote`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_string();
    let detail = parse_detail(&resp.text().await.unwrap_or_default());
    tracing::debug!(status = status.as_u16(), ?detail, "backend returned an error status");
    Err(ClientError::Remote {
        status: status.as_u16(),
        status_text,
        detail,
    })
}

/// Read the body as JSON.
pub async fn read_json(
    resp: reqwest::Response,
    url: &str,
    timeout: Option<Duration>,
) -> Result<Value, ClientError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|error| transport_error(error, url, timeout))?;
    serde_json::from_slice(&bytes).map_err(|e| malformed(url, format!("invalid JSON: {e}")))
}

/// Build a [`ClientError::Malformed`], logging it.
pub fn malformed(url: &str, reason: impl Into<String>) -> ClientError {
    let reason = reason.into();
    tracing::warn!(url, %reason, "malformed backend response");
    ClientError::Malformed {
        url: url.to_string(),
        reason,
    }
}

fn transport_error(error: reqwest::Error, url: &str, timeout: Option<Duration>) -> ClientError {
    if error.is_timeout() {
        let timeout = timeout.unwrap_or_default();
        tracing::warn!(url, timeout_secs = timeout.as_secs(), "backend request timed out");
        return ClientError::Timeout {
            url: url.to_string(),
            timeout,
        };
    }
    tracing::warn!(url, %error, "backend request failed");
    ClientError::Unreachable {
        url: url.to_string(),
        source: error,
    }
}

/// Extract FastAPI's `{"detail": ...}` message, or fall back to the raw body.
fn parse_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return Some(detail.clone()),
            Some(detail) if !detail.is_null() => return Some(detail.to_string()),
            _ => {}
        }
    }
    Some(body.chars().take(MAX_DETAIL_CHARS).collect())
}
