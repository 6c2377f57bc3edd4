use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::stage::{Stage, StageOutput};

/// Stage 3 result: technology stack, data model, API surface and rollout plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TechBlueprint {
    pub startup_idea: String,
    pub user_id: String,
    pub session_id: String,
    /// Technology choices grouped by layer (`frontend`, `backend`, ...).
    pub tech_stack: BTreeMap<String, Vec<TechChoice>>,
    #[serde(default)]
    pub database_schema: Vec<DatabaseTable>,
    #[serde(default)]
    pub api_endpoints: Vec<ApiEndpoint>,
    #[serde(default)]
    pub deployment_strategy: DeploymentStrategy,
    #[serde(default)]
    pub security_considerations: SecurityConsiderations,
    #[serde(default)]
    pub third_party_services: BTreeMap<String, Value>,
    #[serde(default)]
    pub development_tools: Vec<Value>,
    #[serde(default)]
    pub implementation_roadmap: Vec<Value>,
    /// Diagram source (usually Mermaid, sometimes wrapped in a code fence).
    #[serde(default)]
    pub architecture_diagram: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StageOutput for TechBlueprint {
    const STAGE: Stage = Stage::TechBlueprint;

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TechChoice {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub alternatives_considered: Vec<String>,
    #[serde(default)]
    pub learning_curve: String,
    #[serde(default)]
    pub community_support: String,
    #[serde(default)]
    pub documentation_quality: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DatabaseTable {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<Value>,
    #[serde(default)]
    pub relationships: Vec<Value>,
    #[serde(default)]
    pub indexes: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ApiEndpoint {
    pub path: String,
    pub method: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub request_body: Option<Value>,
    #[serde(default)]
    pub response_structure: Value,
    #[serde(default)]
    pub auth_required: bool,
    #[serde(default)]
    pub related_features: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DeploymentStrategy {
    #[serde(default)]
    pub recommended_approach: String,
    #[serde(default)]
    pub infrastructure: String,
    #[serde(default)]
    pub ci_cd_pipeline: BTreeMap<String, String>,
    #[serde(default)]
    pub scaling_strategy: String,
    /// Either a free-text estimate or a per-item breakdown.
    #[serde(default)]
    pub estimated_costs: Value,
    #[serde(default)]
    pub monitoring_tools: Vec<String>,
    #[serde(default)]
    pub backup_strategy: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SecurityConsiderations {
    #[serde(default)]
    pub authentication_method: String,
    #[serde(default)]
    pub authorization_approach: String,
    #[serde(default)]
    pub data_encryption: BTreeMap<String, String>,
    #[serde(default)]
    pub security_best_practices: Vec<String>,
    #[serde(default)]
    pub compliance_considerations: Vec<String>,
    #[serde(default)]
    pub security_testing: Vec<String>,
}
