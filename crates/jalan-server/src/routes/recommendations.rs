//! Recommendation routes — logic-based scoring, no upstream involved.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use jalan_query::{AccessibilityPreference, DietaryPreference, UserProfile};

use crate::routes::eval_time;
use crate::state::AppState;

const DEFAULT_TOP_N: usize = 5;
const MAX_TOP_N: usize = 20;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", post(recommendations))
        .route("/recommendations/quick", get(quick_recommendations))
}

#[derive(Debug, Deserialize)]
struct RecommendationsRequest {
    user_profile: UserProfile,
    #[serde(default)]
    current_time: Option<String>,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize)]
struct QuickParams {
    #[serde(default)]
    dietary: DietaryPreference,
    #[serde(default)]
    accessibility: AccessibilityPreference,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

/// POST /api/recommendations — full profile plus optional evaluation time.
async fn recommendations(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendationsRequest>,
) -> Json<serde_json::Value> {
    run_recommend(&state, req.user_profile, req.current_time.as_deref(), req.top_n)
}

/// GET /api/recommendations/quick — minimal params for the initial home
/// page load.
async fn quick_recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuickParams>,
) -> Json<serde_json::Value> {
    let profile = UserProfile {
        dietary: params.dietary,
        accessibility: params.accessibility,
        ..Default::default()
    };
    run_recommend(&state, profile, None, params.top_n)
}

fn run_recommend(
    state: &AppState,
    profile: UserProfile,
    current_time: Option<&str>,
    top_n: usize,
) -> Json<serde_json::Value> {
    let at = eval_time(current_time);
    let top_n = top_n.clamp(1, MAX_TOP_N);
    let recommendations = jalan_query::recommend(&state.catalog, &profile, at, top_n);

    Json(serde_json::json!({
        "recommendations": recommendations,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    }))
}
