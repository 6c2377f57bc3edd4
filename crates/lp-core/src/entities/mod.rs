//! Stage results, the chain aggregate, and the persisted backend record.

mod blueprint;
mod market;
mod output;
mod roadmap;

pub use blueprint::{
    ApiEndpoint, DatabaseTable, DeploymentStrategy, SecurityConsiderations, TechBlueprint,
    TechChoice,
};
pub use market::{
    Competitor, MarketAnalysis, MarketSizing, MarketTrends, OpportunityAnalysis, RiskAnalysis,
};
pub use output::AgentOutput;
pub use roadmap::{Feature, ProductRoadmap, UserPersona};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::RunIdentity;

/// The all-or-nothing result of one chain run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChainResult {
    pub market_analysis: MarketAnalysis,
    pub product_roadmap: ProductRoadmap,
    pub tech_blueprint: TechBlueprint,
}

impl ChainResult {
    /// Identity of the run, as echoed by the final stage.
    #[must_use]
    pub fn identity(&self) -> RunIdentity {
        RunIdentity::new(
            self.tech_blueprint.user_id.clone(),
            self.tech_blueprint.session_id.clone(),
        )
    }
}
