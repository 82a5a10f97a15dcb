//! Shared application state.

use jalan_catalog::Catalog;
use jalan_core::JalanConfig;
use jalan_planner::{UpstreamClient, UpstreamConfig};
use jalan_query::SubstringMatcher;
use parking_lot::RwLock;

/// Shared application state accessible from all route handlers.
///
/// The catalog is loaded once in `main` and read-only from then on; the
/// upstream configuration is the only mutable piece.
pub struct AppState {
    pub config: JalanConfig,
    pub catalog: Catalog,
    pub matcher: SubstringMatcher,
    pub upstream_config: RwLock<UpstreamConfig>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: JalanConfig, catalog: Catalog) -> Self {
        let upstream_config = UpstreamConfig::load(&config.data_paths.upstream_config_file);

        Self {
            config,
            catalog,
            matcher: SubstringMatcher,
            upstream_config: RwLock::new(upstream_config),
            upstream: UpstreamClient::new(),
        }
    }
}
