//! Itinerary routes — upstream generation plus local enrichment.
//!
//! The upstream table returns place names and reasoning text; every
//! activity is then enriched with catalog data (images, addresses, hours)
//! before it leaves this server.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::Stream;
use serde::Serialize;
use tokio_stream::StreamExt;
use tracing::warn;

use jalan_core::Error;
use jalan_planner::{
    GeneratedItinerary, ItineraryRequest, PlannerChunk, ReasoningChain, UpstreamOutcome,
};
use jalan_query::{enrich_all, ItineraryActivity};

use crate::routes::eval_time;
use crate::state::AppState;

type SseStream = Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>;

const MALFORMED_SUMMARY: &str = "Upstream returned an itinerary that could not be parsed";
const NOT_CONFIGURED: &str = "Upstream itinerary service not configured";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/itinerary", post(generate_itinerary))
        .route("/itinerary/stream", post(stream_itinerary))
        .route("/itinerary/health", get(upstream_health))
}

#[derive(Debug, Serialize)]
struct ItineraryResponse {
    itinerary: Vec<ItineraryActivity>,
    summary: Option<String>,
    transport_notes: Option<String>,
    reasoning_chain: ReasoningChain,
}

/// Turn an upstream result into the external response: enrich on success,
/// degrade to an empty itinerary with a diagnostic summary on a malformed
/// payload. Never fails the request.
fn build_response(state: &AppState, generated: GeneratedItinerary) -> ItineraryResponse {
    match generated.outcome {
        UpstreamOutcome::Parsed(payload) => {
            let at = eval_time(None);
            ItineraryResponse {
                itinerary: enrich_all(&state.catalog, &state.matcher, payload.itinerary, at),
                summary: payload.summary,
                transport_notes: payload.transport_notes,
                reasoning_chain: generated.reasoning,
            }
        }
        UpstreamOutcome::Malformed { raw } => {
            warn!(raw_len = raw.len(), "upstream final step was not valid JSON");
            ItineraryResponse {
                itinerary: Vec::new(),
                summary: Some(MALFORMED_SUMMARY.into()),
                transport_notes: None,
                reasoning_chain: generated.reasoning,
            }
        }
    }
}

/// POST /api/itinerary — generate and enrich a day itinerary.
async fn generate_itinerary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItineraryRequest>,
) -> impl IntoResponse {
    let resolved = { state.upstream_config.read().resolve() };
    let Some(resolved) = resolved else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": NOT_CONFIGURED })),
        )
            .into_response();
    };

    match state.upstream.generate(&resolved, &req).await {
        Ok(generated) => (StatusCode::OK, Json(build_response(&state, generated))).into_response(),
        Err(Error::UpstreamUnavailable(msg)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": format!("Upstream unavailable: {msg}") })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// POST /api/itinerary/stream — SSE with per-step token events and a
/// final enriched `complete` event.
async fn stream_itinerary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItineraryRequest>,
) -> Sse<SseStream> {
    let resolved = { state.upstream_config.read().resolve() };
    let Some(resolved) = resolved else {
        let error_stream: SseStream = Box::pin(async_stream::stream! {
            yield Ok::<_, Infallible>(sse_json(
                &serde_json::json!({ "type": "error", "message": NOT_CONFIGURED }),
            ));
        });
        return Sse::new(error_stream);
    };

    let mut planner_stream = state.upstream.generate_stream(&resolved, &req);

    let stream: SseStream = Box::pin(async_stream::stream! {
        while let Some(chunk) = planner_stream.next().await {
            match chunk {
                PlannerChunk::Token { step, text } => {
                    yield Ok(sse_json(&serde_json::json!({
                        "type": "token",
                        "step": step,
                        "text": text,
                    })));
                }
                PlannerChunk::Done(generated) => {
                    let response = build_response(&state, *generated);
                    yield Ok(sse_json(&serde_json::json!({
                        "type": "complete",
                        "data": response,
                    })));
                }
                PlannerChunk::Error(message) => {
                    yield Ok(sse_json(&serde_json::json!({
                        "type": "error",
                        "message": message,
                    })));
                }
            }
        }
    });

    Sse::new(stream)
}

/// GET /api/itinerary/health — upstream configuration status.
async fn upstream_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let resolved = { state.upstream_config.read().resolve() };
    Json(serde_json::json!({
        "status": if resolved.is_some() { "ok" } else { "unavailable" },
        "upstream_connected": resolved.is_some(),
        "action_table": resolved.map(|r| r.table_id),
    }))
}

fn sse_json(value: &serde_json::Value) -> Event {
    Event::default().data(value.to_string())
}
