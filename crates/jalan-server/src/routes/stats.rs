//! Stats route — catalog and upstream status at a glance.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use jalan_catalog::PlaceType;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /api/stats — catalog composition and upstream status.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let food = state
        .catalog
        .iter()
        .filter(|r| r.place_type == PlaceType::Food)
        .count();

    Json(serde_json::json!({
        "places": state.catalog.len(),
        "food": food,
        "tourist_spots": state.catalog.len() - food,
        "upstream_configured": state.upstream_config.read().resolve().is_some(),
        "port": state.config.port,
    }))
}
