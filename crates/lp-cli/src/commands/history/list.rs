use lp_config::LaunchpadConfig;
use lp_core::entities::AgentOutput;
use lp_core::history::{HistoryEntry, filter_by_idea};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryListArgs;
use crate::commands::shared::{backend, effective_limit, signed_in_user};
use crate::output::output;

pub async fn handle(
    args: &HistoryListArgs,
    flags: &GlobalFlags,
    config: &LaunchpadConfig,
) -> anyhow::Result<()> {
    let user_id = signed_in_user(config).await?;
    let outputs = backend(config)?.list_outputs(&user_id).await?;
    tracing::debug!(user_id = %user_id, count = outputs.len(), "history loaded");

    let limit = effective_limit(flags.limit, config);
    let entries = entries(&outputs, args.search.as_deref(), limit);
    output(&entries, flags.format)
}

fn entries(outputs: &[AgentOutput], search: Option<&str>, limit: usize) -> Vec<HistoryEntry> {
    filter_by_idea(outputs, search.unwrap_or_default())
        .into_iter()
        .take(limit)
        .map(HistoryEntry::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use lp_test_utils::fixtures;
    use pretty_assertions::assert_eq;

    use super::*;

    fn outputs() -> Vec<AgentOutput> {
        [
            ("session_1_aaaa", fixtures::POWER_TOOLS_IDEA),
            ("session_2_bbbb", "Meal kits for busy climbers"),
            ("session_3_cccc", "Power washing on demand"),
        ]
        .into_iter()
        .map(|(sid, idea)| {
            serde_json::from_value(fixtures::stored_output(fixtures::USER_ID, sid, idea))
                .expect("stored output fixture")
        })
        .collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = entries(&outputs(), Some("POWER"), 20);
        let ids = rows.iter().map(|row| row.session_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["session_1_aaaa", "session_3_cccc"]);
    }

    #[test]
    fn limit_applies_after_filtering() {
        let rows = entries(&outputs(), None, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].startup_idea, fixtures::POWER_TOOLS_IDEA);
    }
}
