use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::BackendClient;

/// Outcome of a `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub url: String,
    pub reachable: bool,
    /// `status` field of the response body, the HTTP status line when the
    /// body has none, or the transport error.
    pub status: String,
    pub latency_ms: u64,
}

impl BackendClient {
    /// Probe the backend. An unreachable or failing backend is reported in
    /// the returned status, not as an error; a missing base URL already
    /// failed in [`BackendClient::new`].
    pub async fn health(&self) -> HealthStatus {
        let url = self.url("health");
        let started = Instant::now();
        let result = crate::http::send(self.http.get(&url), &url, self.health_timeout).await;

        let (reachable, status) = match result {
            Ok(resp) => {
                let code = resp.status();
                let body: Option<Value> = resp.json().await.ok();
                let status = body
                    .as_ref()
                    .and_then(|b| b.get("status"))
                    .and_then(Value::as_str)
                    .map_or_else(|| code.to_string(), str::to_string);
                (code.is_success(), status)
            }
            Err(error) => (false, error.to_string()),
        };

        HealthStatus {
            url,
            reachable,
            status,
            latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}
