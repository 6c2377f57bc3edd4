use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::stage::Stage;

/// The backend's persisted record of one completed chain.
///
/// Stage responses are kept as raw JSON: the backend stores them with the
/// identity fields stripped, so they do not satisfy the live stage schemas.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AgentOutput {
    #[serde(default)]
    pub id: Option<Value>,
    pub user_id: String,
    pub session_id: String,
    #[serde(default)]
    pub market_analyst_response: Value,
    #[serde(default)]
    pub product_manager_response: Value,
    #[serde(default)]
    pub tech_architect_response: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AgentOutput {
    /// Raw response stored for `stage`.
    #[must_use]
    pub const fn response(&self, stage: Stage) -> &Value {
        match stage {
            Stage::MarketAnalysis => &self.market_analyst_response,
            Stage::ProductRoadmap => &self.product_manager_response,
            Stage::TechBlueprint => &self.tech_architect_response,
        }
    }

    /// The startup idea, if the market report recorded one.
    #[must_use]
    pub fn startup_idea(&self) -> Option<&str> {
        self.market_analyst_response
            .get("startup_idea")
            .and_then(Value::as_str)
            .filter(|idea| !idea.trim().is_empty())
    }

    /// The market opportunity score, if recorded.
    #[must_use]
    pub fn opportunity_score(&self) -> Option<f64> {
        self.market_analyst_response
            .get("opportunity_score")
            .and_then(Value::as_f64)
    }

    /// The architecture diagram source from the technical blueprint.
    #[must_use]
    pub fn architecture_diagram(&self) -> Option<&str> {
        self.tech_architect_response
            .get("architecture_diagram")
            .and_then(Value::as_str)
            .filter(|diagram| !diagram.trim().is_empty())
    }
}
