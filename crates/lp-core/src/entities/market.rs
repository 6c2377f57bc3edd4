use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::stage::{Stage, StageOutput};

/// Stage 1 result: market research report for a startup idea.
///
/// Only the identity fields, the idea and the opportunity score are required.
/// Everything else defaults to empty, and fields this crate does not model are
/// kept in [`extra`](Self::extra) so the report is forwarded to stage 2 intact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MarketAnalysis {
    pub startup_idea: String,
    pub user_id: String,
    pub session_id: String,
    /// Overall attractiveness of the opportunity, 0 to 10.
    #[schemars(range(min = 0, max = 10))]
    pub opportunity_score: f64,
    #[serde(default)]
    pub analysis_date: Option<String>,
    #[serde(default)]
    pub executive_summary: String,
    #[serde(default)]
    pub market_sizing: MarketSizing,
    #[serde(default)]
    pub market_trends: MarketTrends,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub competitive_landscape_summary: String,
    #[serde(default)]
    pub market_leaders: Vec<String>,
    #[serde(default)]
    pub opportunity_analysis: OpportunityAnalysis,
    #[serde(default)]
    pub risk_analysis: RiskAnalysis,
    #[serde(default)]
    pub target_audience_segments: Vec<Value>,
    #[serde(default)]
    pub go_to_market_insights: Vec<String>,
    #[serde(default)]
    pub strategic_recommendations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StageOutput for MarketAnalysis {
    const STAGE: Stage = Stage::MarketAnalysis;

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarketSizing {
    #[serde(default)]
    pub total_addressable_market: Option<String>,
    #[serde(default)]
    pub serviceable_addressable_market: Option<String>,
    #[serde(default)]
    pub serviceable_obtainable_market: Option<String>,
    #[serde(default)]
    pub market_growth_rate: Option<String>,
    #[serde(default)]
    pub geographic_distribution: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MarketTrends {
    #[serde(default)]
    pub emerging_trends: Vec<String>,
    #[serde(default)]
    pub technology_trends: Vec<String>,
    #[serde(default)]
    pub consumer_behavior: Vec<String>,
    #[serde(default)]
    pub regulatory_factors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Competitor {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pricing_model: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub competitive_score: f64,
    #[serde(default)]
    pub market_share: Option<String>,
    #[serde(default)]
    pub funding_info: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpportunityAnalysis {
    #[serde(default)]
    pub market_gaps: Vec<String>,
    #[serde(default)]
    pub underserved_segments: Vec<String>,
    #[serde(default)]
    pub differentiation_opportunities: Vec<String>,
    #[serde(default)]
    pub barrier_to_entry: BTreeMap<String, String>,
    #[serde(default)]
    pub success_factors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskAnalysis {
    #[serde(default)]
    pub market_risks: Vec<String>,
    #[serde(default)]
    pub competitive_risks: Vec<String>,
    #[serde(default)]
    pub technology_risks: Vec<String>,
    #[serde(default)]
    pub regulatory_risks: Vec<String>,
    #[serde(default)]
    pub mitigation_strategies: Vec<String>,
}
