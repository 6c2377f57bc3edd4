//! Request bodies for the backend routes.
//!
//! Stage 2 and stage 3 requests read their identity from the previous stage's
//! result instead of taking it separately, so a run cannot mix identities.

use serde::Serialize;

use crate::entities::{MarketAnalysis, ProductRoadmap};
use crate::idea::StartupIdea;
use crate::identity::RunIdentity;

/// Body of `POST /market-analyst`.
#[derive(Debug, Clone, Serialize)]
pub struct MarketAnalysisRequest<'a> {
    pub startup_idea: &'a str,
    pub user_id: &'a str,
    pub session_id: &'a str,
}

impl<'a> MarketAnalysisRequest<'a> {
    #[must_use]
    pub fn new(idea: &'a StartupIdea, identity: &'a RunIdentity) -> Self {
        Self {
            startup_idea: idea.as_str(),
            user_id: &identity.user_id,
            session_id: &identity.session_id,
        }
    }
}

/// Body of `POST /product-manager`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRoadmapRequest<'a> {
    pub market_report: &'a MarketAnalysis,
    pub user_id: &'a str,
    pub session_id: &'a str,
}

impl<'a> ProductRoadmapRequest<'a> {
    #[must_use]
    pub fn from_market(market_report: &'a MarketAnalysis) -> Self {
        Self {
            market_report,
            user_id: &market_report.user_id,
            session_id: &market_report.session_id,
        }
    }
}

/// Body of `POST /technical-architect`.
#[derive(Debug, Clone, Serialize)]
pub struct TechBlueprintRequest<'a> {
    pub product_roadmap: &'a ProductRoadmap,
    pub user_id: &'a str,
    pub session_id: &'a str,
}

impl<'a> TechBlueprintRequest<'a> {
    #[must_use]
    pub fn from_roadmap(product_roadmap: &'a ProductRoadmap) -> Self {
        Self {
            product_roadmap,
            user_id: &product_roadmap.user_id,
            session_id: &product_roadmap.session_id,
        }
    }
}

/// Body of `POST /outputs/session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionLookupRequest<'a> {
    pub session_id: &'a str,
}
