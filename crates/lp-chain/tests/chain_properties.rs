//! Chain behavior against a recording in-memory stage implementation and
//! against the fake HTTP backend.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lp_auth::StaticIdentity;
use lp_chain::{ChainError, ChainObserver, ChainRunner, ErrorCategory};
use lp_client::{BackendClient, ClientError, ErrorKind, StageApi};
use lp_config::ApiConfig;
use lp_core::requests::{MarketAnalysisRequest, ProductRoadmapRequest, TechBlueprintRequest};
use lp_core::{MarketAnalysis, ProductRoadmap, Stage, TechBlueprint};
use lp_test_utils::Reply;
use lp_test_utils::fixtures::{self, POWER_TOOLS_IDEA, USER_ID};
use pretty_assertions::assert_eq;

const SID: &str = "session_1740000000000_c0de";

/// Records `(stage, session_id)` per call and fails the configured stage.
#[derive(Default)]
struct RecordingStages {
    calls: Mutex<Vec<(Stage, String)>>,
    fail_at: Option<Stage>,
    /// Session ID echoed back instead of the request's.
    echo_session: Option<String>,
}

impl RecordingStages {
    fn failing_at(stage: Stage) -> Self {
        Self {
            fail_at: Some(stage),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(Stage, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, stage: Stage, session_id: &str) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push((stage, session_id.to_string()));
        if self.fail_at == Some(stage) {
            return Err(ClientError::Remote {
                status: 500,
                status_text: "Internal Server Error".into(),
                detail: Some(format!("{stage} exploded")),
            });
        }
        Ok(self
            .echo_session
            .clone()
            .unwrap_or_else(|| session_id.to_string()))
    }
}

#[async_trait]
impl StageApi for RecordingStages {
    async fn market_analysis(
        &self,
        request: &MarketAnalysisRequest<'_>,
    ) -> Result<MarketAnalysis, ClientError> {
        let sid = self.record(Stage::MarketAnalysis, request.session_id)?;
        Ok(serde_json::from_value(fixtures::market_response(
            request.startup_idea,
            request.user_id,
            &sid,
        ))
        .unwrap())
    }

    async fn product_roadmap(
        &self,
        request: &ProductRoadmapRequest<'_>,
    ) -> Result<ProductRoadmap, ClientError> {
        let sid = self.record(Stage::ProductRoadmap, request.session_id)?;
        Ok(serde_json::from_value(fixtures::roadmap_response(
            &request.market_report.startup_idea,
            request.user_id,
            &sid,
        ))
        .unwrap())
    }

    async fn technical_blueprint(
        &self,
        request: &TechBlueprintRequest<'_>,
    ) -> Result<TechBlueprint, ClientError> {
        let sid = self.record(Stage::TechBlueprint, request.session_id)?;
        Ok(serde_json::from_value(fixtures::blueprint_response(
            &request.product_roadmap.startup_idea,
            request.user_id,
            &sid,
        ))
        .unwrap())
    }
}

fn runner(stages: RecordingStages) -> ChainRunner<RecordingStages, StaticIdentity> {
    ChainRunner::new(stages, StaticIdentity::signed_in(USER_ID).with_session_id(SID))
}

#[tokio::test]
async fn short_idea_fails_before_any_stage() {
    let runner = runner(RecordingStages::default());
    let err = runner.run("  tools   ").await.unwrap_err();

    assert!(matches!(err, ChainError::InvalidIdea(_)));
    assert_eq!(err.category(), ErrorCategory::Input);
    assert!(runner.stages().calls().is_empty());
}

#[tokio::test]
async fn signed_out_user_fails_before_any_stage() {
    let runner = ChainRunner::new(RecordingStages::default(), StaticIdentity::anonymous());
    let err = runner.run(POWER_TOOLS_IDEA).await.unwrap_err();

    assert!(matches!(err, ChainError::NotSignedIn));
    assert!(runner.stages().calls().is_empty());
}

#[tokio::test]
async fn session_id_is_shared_by_every_request_and_result() {
    let runner = runner(RecordingStages::default());
    let result = runner.run(POWER_TOOLS_IDEA).await.unwrap();

    assert_eq!(
        runner.stages().calls(),
        vec![
            (Stage::MarketAnalysis, SID.to_string()),
            (Stage::ProductRoadmap, SID.to_string()),
            (Stage::TechBlueprint, SID.to_string()),
        ]
    );
    assert_eq!(result.market_analysis.session_id, SID);
    assert_eq!(result.product_roadmap.session_id, SID);
    assert_eq!(result.tech_blueprint.session_id, SID);
    assert_eq!(result.identity().session_id, SID);
}

#[tokio::test]
async fn first_stage_failure_stops_the_chain() {
    let runner = runner(RecordingStages::failing_at(Stage::MarketAnalysis));
    let err = runner.run(POWER_TOOLS_IDEA).await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::MarketAnalysis));
    assert_eq!(runner.stages().calls().len(), 1);
}

#[tokio::test]
async fn second_stage_error_is_returned_unchanged() {
    let runner = runner(RecordingStages::failing_at(Stage::ProductRoadmap));
    let err = runner.run(POWER_TOOLS_IDEA).await.unwrap_err();

    match &err {
        ChainError::Stage {
            stage: Stage::ProductRoadmap,
            source: ClientError::Remote { status: 500, detail, .. },
        } => assert_eq!(detail.as_deref(), Some("product_roadmap exploded")),
        other => panic!("expected the product roadmap error, got {other:?}"),
    }
    assert_eq!(err.category(), ErrorCategory::RequestFailed);
    let stages: Vec<Stage> = runner.stages().calls().into_iter().map(|(s, _)| s).collect();
    assert_eq!(stages, vec![Stage::MarketAnalysis, Stage::ProductRoadmap]);
}

#[tokio::test]
async fn foreign_session_echo_is_malformed() {
    let runner = runner(RecordingStages {
        echo_session: Some("session_someone_else".into()),
        ..RecordingStages::default()
    });
    let err = runner.run(POWER_TOOLS_IDEA).await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::MarketAnalysis));
    assert_eq!(err.client_error().map(ClientError::kind), Some(ErrorKind::Malformed));
    assert_eq!(runner.stages().calls().len(), 1);
}

#[derive(Default)]
struct EventLog(Vec<String>);

impl ChainObserver for EventLog {
    fn run_started(&mut self, identity: &lp_core::RunIdentity) {
        self.0.push(format!("run {}", identity.session_id));
    }

    fn stage_started(&mut self, stage: Stage) {
        self.0.push(format!("start {stage}"));
    }

    fn stage_finished(&mut self, stage: Stage, _elapsed: Duration) {
        self.0.push(format!("done {stage}"));
    }

    fn stage_failed(&mut self, stage: Stage, _error: &ClientError) {
        self.0.push(format!("fail {stage}"));
    }
}

#[tokio::test]
async fn observer_sees_stages_in_order() {
    let runner = runner(RecordingStages::failing_at(Stage::TechBlueprint));
    let mut log = EventLog::default();
    runner
        .run_observed(POWER_TOOLS_IDEA, &mut log)
        .await
        .unwrap_err();

    assert_eq!(
        log.0,
        vec![
            format!("run {SID}"),
            "start market_analysis".to_string(),
            "done market_analysis".to_string(),
            "start product_roadmap".to_string(),
            "done product_roadmap".to_string(),
            "start tech_blueprint".to_string(),
            "fail tech_blueprint".to_string(),
        ]
    );
}

#[tokio::test]
async fn power_tools_fixture_run_over_http() {
    let backend = fixtures::stage_backend().await;
    let client = BackendClient::new(&ApiConfig::with_base_url(backend.base_url())).unwrap();
    let runner = ChainRunner::new(client, StaticIdentity::signed_in(USER_ID));

    let result = runner.run(POWER_TOOLS_IDEA).await.unwrap();
    let minted = result.market_analysis.session_id.clone();

    assert!(lp_core::ids::is_session_id(&minted));
    assert!((0.0..=10.0).contains(&result.market_analysis.opportunity_score));
    assert_eq!(
        result.product_roadmap.market_analyst_data.as_deref(),
        Some(&result.market_analysis)
    );
    assert_eq!(result.tech_blueprint.session_id, minted);

    let requests = backend.requests();
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/market-analyst", "/product-manager", "/technical-architect"]
    );
    for request in &requests {
        assert_eq!(request.body["session_id"], minted.as_str());
        assert_eq!(request.body["user_id"], USER_ID);
    }
    assert_eq!(
        requests[2].body["product_roadmap"]["_market_analyst_data"]["session_id"],
        minted.as_str()
    );
}

#[tokio::test]
async fn unreachable_backend_is_unavailable() {
    let base_url = lp_test_utils::refused_base_url().await;
    let client = BackendClient::new(&ApiConfig::with_base_url(base_url)).unwrap();
    let runner = ChainRunner::new(client, StaticIdentity::signed_in(USER_ID));

    let err = runner.run(POWER_TOOLS_IDEA).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Unavailable);
    assert_eq!(err.stage(), Some(Stage::MarketAnalysis));
}

#[tokio::test]
async fn stalled_stage_times_out_within_bound() {
    let backend = fixtures::stage_backend().await;
    backend.route("POST", "/product-manager", Reply::Stall);
    let config = ApiConfig {
        stage_timeout_secs: 1,
        ..ApiConfig::with_base_url(backend.base_url())
    };
    let runner = ChainRunner::new(
        BackendClient::new(&config).unwrap(),
        StaticIdentity::signed_in(USER_ID),
    );

    let started = std::time::Instant::now();
    let err = tokio::time::timeout(Duration::from_secs(10), runner.run(POWER_TOOLS_IDEA))
        .await
        .expect("stage bound should fire before the test guard")
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(err.stage(), Some(Stage::ProductRoadmap));
    assert_eq!(err.client_error().map(ClientError::kind), Some(ErrorKind::Timeout));
    assert_eq!(err.category(), ErrorCategory::Unavailable);
    assert!(backend.requests_to("/technical-architect").is_empty());
}

#[tokio::test]
async fn foreign_session_over_http_reports_full_url() {
    let backend = fixtures::stage_backend().await;
    backend.route(
        "POST",
        "/market-analyst",
        Reply::dynamic(|body| {
            let idea = body["startup_idea"].as_str().unwrap_or_default();
            (200, fixtures::market_response(idea, USER_ID, "session_1_dead"))
        }),
    );
    let client = BackendClient::new(&ApiConfig::with_base_url(backend.base_url())).unwrap();
    let runner = ChainRunner::new(client, StaticIdentity::signed_in(USER_ID));

    let err = runner.run(POWER_TOOLS_IDEA).await.unwrap_err();
    match err.client_error() {
        Some(ClientError::Malformed { url, .. }) => {
            assert_eq!(url, &format!("{}/market-analyst", backend.base_url()));
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}
