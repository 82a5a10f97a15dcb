//! Place catalog — the in-memory table of place records.
//!
//! The catalog is loaded once at process start (Parquet preferred, CSV
//! fallback) and injected into every component as a read-only handle.
//! All derived facts (open-now, accessibility, minimum price) are computed
//! on read by `jalan-query`; records are never mutated after load.

pub mod loader;
pub mod types;

pub use loader::Catalog;
pub use types::{PlaceRecord, PlaceType};
