//! Search routes — filterable place listings.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use jalan_query::SearchCriteria;

use crate::routes::eval_time;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search_get).post(search_post))
}

/// GET /api/search — criteria as query parameters.
async fn search_get(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<SearchCriteria>,
) -> Json<serde_json::Value> {
    run_search(&state, criteria)
}

/// POST /api/search — criteria as a JSON body, for complex filter
/// combinations.
async fn search_post(
    State(state): State<Arc<AppState>>,
    Json(criteria): Json<SearchCriteria>,
) -> Json<serde_json::Value> {
    run_search(&state, criteria)
}

fn run_search(state: &AppState, criteria: SearchCriteria) -> Json<serde_json::Value> {
    let at = eval_time(criteria.current_time.as_deref());
    let results = jalan_query::search(&state.catalog, &criteria, at);

    Json(serde_json::json!({
        "results": results,
        "total_count": results.len(),
        "filters_applied": criteria,
    }))
}
