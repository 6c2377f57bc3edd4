use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::MarketAnalysis;
use crate::stage::{Stage, StageOutput};

/// Stage 2 result: personas, prioritized features and milestones.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProductRoadmap {
    pub startup_idea: String,
    pub user_id: String,
    pub session_id: String,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub user_personas: Vec<UserPersona>,
    #[serde(default)]
    pub mvp_features: Vec<String>,
    #[serde(default)]
    pub milestone_1_features: Vec<String>,
    #[serde(default)]
    pub milestone_2_features: Vec<String>,
    #[serde(default)]
    pub validation_experiments: Vec<Value>,
    #[serde(default)]
    pub success_metrics: BTreeMap<String, Value>,
    /// The stage 1 report this roadmap was derived from. Attached by the
    /// chain after stage 2 returns; forwarded to stage 3 for storage.
    #[serde(
        rename = "_market_analyst_data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(skip)]
    pub market_analyst_data: Option<Box<MarketAnalysis>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRoadmap {
    /// Features whose names appear in the MVP milestone list.
    pub fn mvp(&self) -> impl Iterator<Item = &Feature> {
        self.features
            .iter()
            .filter(|feature| self.mvp_features.iter().any(|name| name == &feature.name))
    }
}

impl StageOutput for ProductRoadmap {
    const STAGE: Stage = Stage::ProductRoadmap;

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserPersona {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub demographics: BTreeMap<String, String>,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub behaviors: Vec<String>,
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default)]
    pub tech_savviness: String,
}

/// A candidate product feature with 0–10 planning scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    #[schemars(range(min = 0, max = 10))]
    pub effort: f64,
    #[serde(default)]
    #[schemars(range(min = 0, max = 10))]
    pub impact: f64,
    #[serde(default)]
    #[schemars(range(min = 0, max = 10))]
    pub technical_complexity: f64,
    #[serde(default)]
    pub user_stories: Vec<String>,
    #[serde(default)]
    pub target_personas: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
}
