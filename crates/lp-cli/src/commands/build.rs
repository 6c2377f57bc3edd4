use std::path::Path;

use anyhow::Context;
use lp_auth::ClerkIdentity;
use lp_chain::{ChainError, ChainRunner};
use lp_config::LaunchpadConfig;
use lp_core::{ChainResult, StartupIdea};
use serde::Serialize;

use crate::cli::root_commands::BuildArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::backend;
use crate::output::output;
use crate::progress::StageSpinners;

#[derive(Debug, Serialize)]
struct BuildSummary {
    session_id: String,
    user_id: String,
    startup_idea: String,
    opportunity_score: f64,
    mvp_features: usize,
    api_endpoints: usize,
    saved_to: Option<String>,
}

impl BuildSummary {
    fn new(result: &ChainResult, saved_to: Option<&Path>) -> Self {
        let identity = result.identity();
        Self {
            session_id: identity.session_id,
            user_id: identity.user_id,
            startup_idea: result.market_analysis.startup_idea.clone(),
            opportunity_score: result.market_analysis.opportunity_score,
            mvp_features: result.product_roadmap.mvp().count(),
            api_endpoints: result.tech_blueprint.api_endpoints.len(),
            saved_to: saved_to.map(|path| path.display().to_string()),
        }
    }
}

/// Handle `launchpad build <idea...>`.
pub async fn handle(
    args: &BuildArgs,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    let idea = args.idea();
    // Fail on a short idea before touching config or credentials.
    StartupIdea::parse(&idea).map_err(ChainError::from)?;

    let runner = ChainRunner::new(backend(config)?, ClerkIdentity::from_config(config));
    let mut spinners = StageSpinners::default();
    let result = runner.run_observed(&idea, &mut spinners).await?;

    if let Some(path) = &args.out {
        write_result(path, &result)?;
    }

    match flags.format {
        OutputFormat::Table => output(&BuildSummary::new(&result, args.out.as_deref()), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&result, flags.format),
    }
}

fn write_result(path: &Path, result: &ChainResult) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write build result to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use lp_core::ChainResult;
    use lp_test_utils::fixtures;
    use pretty_assertions::assert_eq;

    use super::*;

    fn chain_result() -> ChainResult {
        let sid = "session_1739500000000_a1b2";
        let value = serde_json::json!({
            "marketAnalysis": fixtures::market_response(fixtures::POWER_TOOLS_IDEA, fixtures::USER_ID, sid),
            "productRoadmap": fixtures::roadmap_response(fixtures::POWER_TOOLS_IDEA, fixtures::USER_ID, sid),
            "techBlueprint": fixtures::blueprint_response(fixtures::POWER_TOOLS_IDEA, fixtures::USER_ID, sid),
        });
        serde_json::from_value(value).expect("fixtures match the chain result shape")
    }

    #[test]
    fn summary_reports_identity_and_counts() {
        let result = chain_result();
        let summary = BuildSummary::new(&result, Some(Path::new("out.json")));

        assert_eq!(summary.session_id, "session_1739500000000_a1b2");
        assert_eq!(summary.user_id, fixtures::USER_ID);
        assert_eq!(summary.startup_idea, fixtures::POWER_TOOLS_IDEA);
        assert!((summary.opportunity_score - 7.4).abs() < f64::EPSILON);
        assert_eq!(summary.mvp_features, result.product_roadmap.mvp().count());
        assert_eq!(summary.saved_to.as_deref(), Some("out.json"));
    }

    #[test]
    fn write_result_produces_readable_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("result.json");
        let result = chain_result();

        write_result(&path, &result).expect("write");
        let read: ChainResult =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(read, result);
    }
}
