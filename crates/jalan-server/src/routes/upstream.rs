//! Upstream configuration routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use jalan_planner::{UpstreamConfigResponse, UpstreamConfigUpdate};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/upstream/config", get(get_config).put(update_config))
}

/// GET /api/upstream/config — masked configuration view.
async fn get_config(State(state): State<Arc<AppState>>) -> Json<UpstreamConfigResponse> {
    Json(state.upstream_config.read().to_response())
}

/// PUT /api/upstream/config — merge an update and persist it.
async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<UpstreamConfigUpdate>,
) -> Json<UpstreamConfigResponse> {
    let mut config = state.upstream_config.write();
    config.apply_update(&update);
    if let Err(e) = config.save() {
        warn!("failed to persist upstream config: {e}");
    }
    Json(config.to_response())
}
