//! Canned backend payloads shaped like the agent backend's responses.

use lp_core::Stage;
use serde_json::{Value, json};

use crate::fake_backend::{FakeBackend, Reply};

pub const POWER_TOOLS_IDEA: &str = "A marketplace for renting power tools";
pub const USER_ID: &str = "user_2abcTestUser";

pub fn market_response(startup_idea: &str, user_id: &str, session_id: &str) -> Value {
    json!({
        "startup_idea": startup_idea,
        "analysis_date": "2025-03-01",
        "executive_summary": "Contractors and DIYers rent tools locally; supply is fragmented.",
        "market_sizing": {
            "total_addressable_market": "$12B",
            "serviceable_addressable_market": "$2.1B",
            "serviceable_obtainable_market": "$85M",
            "market_growth_rate": "6.2% CAGR"
        },
        "market_trends": {
            "emerging_trends": ["peer-to-peer rentals", "on-demand delivery"],
            "technology_trends": ["IoT tool tracking"],
            "consumer_behavior": ["renting over owning"],
            "regulatory_factors": []
        },
        "competitors": [{
            "name": "Home Depot Tool Rental",
            "description": "Big-box in-store rentals",
            "strengths": ["inventory", "locations"],
            "weaknesses": ["no delivery"],
            "competitive_score": 8.1,
            "social_presence": {"twitter": "@HomeDepot"}
        }],
        "opportunity_score": 7.4,
        "opportunity_analysis": {
            "market_gaps": ["last-mile delivery"],
            "underserved_segments": ["weekend DIYers"],
            "differentiation_opportunities": ["peer inventory"]
        },
        "risk_analysis": {
            "market_risks": ["seasonality"],
            "competitive_risks": ["big-box price cuts"],
            "regulatory_risks": ["liability insurance"],
            "technology_risks": []
        },
        "target_audience_segments": [{"segment": "Weekend DIYers", "size": "large"}],
        "strategic_recommendations": ["Launch in one metro area first"],
        "next_steps": ["Interview 20 contractors"],
        "user_id": user_id,
        "session_id": session_id
    })
}

pub fn roadmap_response(startup_idea: &str, user_id: &str, session_id: &str) -> Value {
    json!({
        "startup_idea": startup_idea,
        "user_personas": [{
            "name": "Dana the DIYer",
            "description": "Homeowner with occasional projects",
            "pain_points": ["tools are expensive"],
            "goals": ["finish projects cheaply"]
        }],
        "features": [
            {
                "name": "Tool listings",
                "description": "Owners list tools with photos and prices",
                "priority": "high",
                "effort": 4,
                "impact": 9,
                "technical_complexity": 3
            },
            {
                "name": "Delivery scheduling",
                "description": "Book a delivery window",
                "priority": "medium",
                "effort": 7,
                "impact": 6,
                "technical_complexity": 6
            }
        ],
        "mvp_features": ["Tool listings"],
        "milestone_1_features": ["Delivery scheduling"],
        "milestone_2_features": [],
        "validation_experiments": [{"name": "Landing page", "metric": "signups"}],
        "success_metrics": {"activation": "40% of signups list or rent within 7 days"},
        "user_id": user_id,
        "session_id": session_id
    })
}

pub fn blueprint_response(startup_idea: &str, user_id: &str, session_id: &str) -> Value {
    json!({
        "startup_idea": startup_idea,
        "tech_stack": {
            "frontend": [{"name": "Next.js", "justification": "SSR web app"}],
            "backend": [{"name": "FastAPI", "justification": "async Python API"}],
            "database": [{"name": "PostgreSQL", "justification": "relational bookings"}]
        },
        "database_schema": [{
            "name": "tools",
            "type": "table",
            "fields": [{"name": "id", "type": "uuid"}]
        }],
        "api_endpoints": [{"method": "GET", "path": "/tools", "description": "List tools"}],
        "deployment_strategy": {"recommended_approach": "Vercel + Fly.io", "estimated_costs": {"monthly": "$40"}},
        "architecture_diagram": "```mermaid\ngraph TD\n  Web --> API\n  API --> DB\n```",
        "user_id": user_id,
        "session_id": session_id
    })
}

/// A persisted record as the backend stores it: identity stripped from each
/// stage response.
pub fn stored_output(user_id: &str, session_id: &str, startup_idea: &str) -> Value {
    let strip = |mut value: Value| {
        if let Some(map) = value.as_object_mut() {
            map.remove("user_id");
            map.remove("session_id");
        }
        value
    };
    json!({
        "id": 1,
        "user_id": user_id,
        "session_id": session_id,
        "market_analyst_response": strip(market_response(startup_idea, user_id, session_id)),
        "product_manager_response": strip(roadmap_response(startup_idea, user_id, session_id)),
        "tech_architect_response": strip(blueprint_response(startup_idea, user_id, session_id)),
        "created_at": "2025-03-01T10:15:00"
    })
}

fn field<'a>(body: &'a Value, pointer: &str) -> &'a str {
    body.pointer(pointer).and_then(Value::as_str).unwrap_or_default()
}

/// Route that answers `stage` the way the real backend does: identity is
/// echoed from the request body, and the roadmap carries the incoming
/// market report (minus identity) under `_market_analyst_data`.
pub fn stage_reply(stage: Stage) -> Reply {
    Reply::dynamic(move |body| {
        let user_id = field(body, "/user_id");
        let session_id = field(body, "/session_id");
        let response = match stage {
            Stage::MarketAnalysis => {
                market_response(field(body, "/startup_idea"), user_id, session_id)
            }
            Stage::ProductRoadmap => {
                let idea = field(body, "/market_report/startup_idea");
                let mut echoed = body.get("market_report").cloned().unwrap_or_default();
                if let Some(map) = echoed.as_object_mut() {
                    map.remove("user_id");
                    map.remove("session_id");
                }
                let mut roadmap = roadmap_response(idea, user_id, session_id);
                roadmap["_market_analyst_data"] = echoed;
                roadmap
            }
            Stage::TechBlueprint => blueprint_response(
                field(body, "/product_roadmap/startup_idea"),
                user_id,
                session_id,
            ),
        };
        (200, response)
    })
}

/// A fake backend answering all three stage routes.
pub async fn stage_backend() -> FakeBackend {
    let backend = FakeBackend::start().await;
    for stage in Stage::ALL {
        backend.route("POST", &format!("/{}", stage.endpoint()), stage_reply(stage));
    }
    backend
}
