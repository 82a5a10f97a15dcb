//! Query engine — filtering, scoring, and enrichment over the place catalog.
//!
//! Everything here is pure computation over an injected [`Catalog`] handle
//! and a caller-supplied evaluation time; no I/O, no hidden clock reads.
//! Callers that need determinism always pass the time explicitly.
//!
//! [`Catalog`]: jalan_catalog::Catalog

pub mod enrich;
pub mod format;
pub mod matcher;
pub mod predicates;
pub mod recommend;
pub mod search;
pub mod types;

pub use enrich::{enrich, enrich_all, ItineraryActivity};
pub use format::format_place;
pub use matcher::{NameMatcher, SubstringMatcher};
pub use recommend::recommend;
pub use search::search;
pub use types::*;
