//! Stage-boundary validation of raw backend responses.

use lp_core::Stage;
use lp_schema::{SchemaError, SchemaRegistry};
use rstest::rstest;
use serde_json::{Value, json};

fn identity() -> Value {
    json!({"user_id": "user_abc", "session_id": "session_1740000000000_0a1b"})
}

fn with_identity(mut body: Value) -> Value {
    if let (Some(target), Some(source)) = (body.as_object_mut(), identity().as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    body
}

fn assert_invalid(stage: Stage, body: &Value, needle: &str) {
    let registry = SchemaRegistry::shared().unwrap();
    match registry.validate_stage(stage, body) {
        Err(SchemaError::ValidationFailed { errors, .. }) => assert!(
            errors.iter().any(|e| e.contains(needle)),
            "expected an error mentioning {needle:?}, got {errors:?}"
        ),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[rstest]
#[case::market(Stage::MarketAnalysis, json!({"startup_idea": "Power tool rentals", "opportunity_score": 7}))]
#[case::roadmap(Stage::ProductRoadmap, json!({"startup_idea": "Power tool rentals", "features": []}))]
#[case::blueprint(Stage::TechBlueprint, json!({"startup_idea": "Power tool rentals", "tech_stack": {}}))]
fn minimal_stage_bodies_pass(#[case] stage: Stage, #[case] body: Value) {
    SchemaRegistry::shared()
        .unwrap()
        .validate_stage(stage, &with_identity(body))
        .unwrap();
}

#[rstest]
#[case::market(Stage::MarketAnalysis, json!({"startup_idea": "Power tool rentals", "opportunity_score": 7}))]
#[case::roadmap(Stage::ProductRoadmap, json!({"startup_idea": "Power tool rentals", "features": []}))]
#[case::blueprint(Stage::TechBlueprint, json!({"startup_idea": "Power tool rentals", "tech_stack": {}}))]
fn missing_session_id_fails(#[case] stage: Stage, #[case] body: Value) {
    let mut body = with_identity(body);
    body.as_object_mut().unwrap().remove("session_id");
    assert_invalid(stage, &body, "session_id");
}

#[rstest]
#[case::negative(-0.5)]
#[case::above_ten(10.5)]
fn opportunity_score_out_of_range_fails(#[case] score: f64) {
    let body = with_identity(json!({
        "startup_idea": "Power tool rentals",
        "opportunity_score": score,
    }));
    assert_invalid(Stage::MarketAnalysis, &body, "opportunity_score");
}

#[test]
fn opportunity_score_bounds_are_inclusive() {
    let registry = SchemaRegistry::shared().unwrap();
    for score in [0.0, 10.0] {
        let body = with_identity(json!({
            "startup_idea": "Power tool rentals",
            "opportunity_score": score,
        }));
        registry.validate_stage(Stage::MarketAnalysis, &body).unwrap();
    }
}

#[test]
fn feature_scores_are_bounded() {
    let body = with_identity(json!({
        "startup_idea": "Power tool rentals",
        "features": [{"name": "Booking", "effort": 11}],
    }));
    assert_invalid(Stage::ProductRoadmap, &body, "effort");
}

#[test]
fn non_object_response_fails() {
    assert_invalid(Stage::TechBlueprint, &json!("oops"), "object");
}
