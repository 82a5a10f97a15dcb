//! Itinerary planner — client for the external reasoning service.
//!
//! The upstream action table does the actual itinerary reasoning; this
//! crate only sends the request, consumes the final or streamed output,
//! and parses the weakly structured payload into a tagged outcome. The
//! enrichment of the returned place names happens in `jalan-query`.

pub mod client;
pub mod config;
pub mod types;

pub use client::{BoxedPlannerStream, UpstreamClient};
pub use config::{ResolvedUpstream, UpstreamConfig, UpstreamConfigResponse, UpstreamConfigUpdate};
pub use types::*;
