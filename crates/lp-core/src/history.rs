//! Summaries of past runs, as listed on the history dashboard.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AgentOutput;

/// Label used when a stored run has no startup idea.
pub const UNNAMED_PROJECT: &str = "Unnamed Project";

/// One row of the run history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoryEntry {
    pub session_id: String,
    pub created_at: Option<String>,
    pub startup_idea: String,
    pub opportunity_score: Option<f64>,
}

impl From<&AgentOutput> for HistoryEntry {
    fn from(output: &AgentOutput) -> Self {
        Self {
            session_id: output.session_id.clone(),
            created_at: output.created_at.clone(),
            startup_idea: output
                .startup_idea()
                .unwrap_or(UNNAMED_PROJECT)
                .to_string(),
            opportunity_score: output.opportunity_score(),
        }
    }
}

/// Keep outputs whose startup idea contains `term`, ignoring case.
///
/// A blank term keeps everything.
#[must_use]
pub fn filter_by_idea<'a>(outputs: &'a [AgentOutput], term: &str) -> Vec<&'a AgentOutput> {
    let needle = term.trim().to_lowercase();
    outputs
        .iter()
        .filter(|output| {
            needle.is_empty()
                || output
                    .startup_idea()
                    .is_some_and(|idea| idea.to_lowercase().contains(&needle))
        })
        .collect()
}
