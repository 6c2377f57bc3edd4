//! Retrieval of persisted chain outputs.

use lp_core::AgentOutput;
use lp_core::requests::SessionLookupRequest;
use serde::Deserialize;
use serde_json::Value;

use crate::BackendClient;
use crate::error::ClientError;
use crate::http::{check_response, malformed, read_json, send};

#[derive(Deserialize)]
struct OutputsResponse {
    #[serde(default)]
    outputs: Vec<AgentOutput>,
}

impl BackendClient {
    /// All outputs the backend stored for `user_id`, as returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Timeout`] if the backend does not answer within
    /// the retrieval bound, or any other [`ClientError`] for transport,
    /// status and parse failures.
    pub async fn list_outputs(&self, user_id: &str) -> Result<Vec<AgentOutput>, ClientError> {
        let url = self.url(&format!("outputs/user/{}", urlencoding::encode(user_id)));
        let timeout = self.retrieval_timeout;

        let resp = send(self.http.get(&url), &url, timeout).await?;
        let value = read_json(check_response(resp).await?, &url, timeout).await?;
        let data: OutputsResponse =
            serde_json::from_value(value).map_err(|e| malformed(&url, e.to_string()))?;

        tracing::debug!(count = data.outputs.len(), "fetched stored outputs");
        Ok(data.outputs)
    }

    /// The output stored for one session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 when the backend has no
    /// output for the session, [`ClientError::Timeout`] past the retrieval
    /// bound, or any other [`ClientError`].
    pub async fn get_output(&self, session_id: &str) -> Result<AgentOutput, ClientError> {
        let url = self.url("outputs/session");
        let timeout = self.retrieval_timeout;
        let body = SessionLookupRequest { session_id };

        let resp = send(self.http.post(&url).json(&body), &url, timeout).await?;
        let value: Value = read_json(check_response(resp).await?, &url, timeout).await?;
        serde_json::from_value(value).map_err(|e| malformed(&url, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_outputs_key_is_empty() {
        let data: OutputsResponse = serde_json::from_str("{}").unwrap();
        assert!(data.outputs.is_empty());
    }

    #[test]
    fn outputs_parse_from_backend_shape() {
        let data: OutputsResponse = serde_json::from_str(
            r#"{"outputs": [{
                "id": 3,
                "user_id": "user_abc",
                "session_id": "session_1",
                "market_analyst_response": {"startup_idea": "Tool rentals"},
                "product_manager_response": {},
                "tech_architect_response": {},
                "created_at": "2025-03-01T10:00:00"
            }]}"#,
        )
        .unwrap();
        assert_eq!(data.outputs.len(), 1);
        assert_eq!(data.outputs[0].startup_idea(), Some("Tool rentals"));
    }
}
