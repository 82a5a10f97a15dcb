//! HTTP route handlers.

pub mod itinerary;
pub mod recommendations;
pub mod search;
pub mod stats;
pub mod upstream;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveTime};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(search::routes())
        .merge(recommendations::routes())
        .merge(itinerary::routes())
        .merge(stats::routes())
        .merge(upstream::routes())
}

/// Resolve the evaluation time for a request: an explicit `"HH:MM"` wins,
/// otherwise the wall clock. Core logic never reads the clock itself.
pub fn eval_time(requested: Option<&str>) -> NaiveTime {
    requested
        .and_then(jalan_query::predicates::parse_clock)
        .unwrap_or_else(|| Local::now().time())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Jalan Tourism API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "search": "/api/search",
            "recommendations": "/api/recommendations",
            "itinerary": "/api/itinerary",
        },
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
