//! Error types for Jalan.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No catalog source file found. Fatal at startup, never per-request.
    #[error("Catalog data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream itinerary service not configured or unreachable.
    /// Surfaced as 503, never conflated with internal errors.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream returned a payload that could not be interpreted at all.
    /// Malformed-but-received payloads are normally recovered via
    /// `UpstreamOutcome::Malformed` instead of this variant.
    #[error("Upstream returned malformed payload: {0}")]
    UpstreamMalformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
