//! The three backend stages and the trait their results share.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One backend computation step of the chain, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    MarketAnalysis,
    ProductRoadmap,
    TechBlueprint,
}

impl Stage {
    /// All stages in chain order.
    pub const ALL: [Self; 3] = [Self::MarketAnalysis, Self::ProductRoadmap, Self::TechBlueprint];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketAnalysis => "market_analysis",
            Self::ProductRoadmap => "product_roadmap",
            Self::TechBlueprint => "tech_blueprint",
        }
    }

    /// Backend route (relative to the API base URL) that runs this stage.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::MarketAnalysis => "market-analyst",
            Self::ProductRoadmap => "product-manager",
            Self::TechBlueprint => "technical-architect",
        }
    }

    /// Human-readable title used in progress output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MarketAnalysis => "Market Analysis",
            Self::ProductRoadmap => "Product Roadmap",
            Self::TechBlueprint => "Technical Blueprint",
        }
    }

    /// One-based position in the chain.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::MarketAnalysis => 1,
            Self::ProductRoadmap => 2,
            Self::TechBlueprint => 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage result carrying the run's correlating identity.
pub trait StageOutput {
    /// The stage that produces this result.
    const STAGE: Stage;

    fn user_id(&self) -> &str;

    fn session_id(&self) -> &str;
}
