//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all Jalan data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Columnar catalog source (`data/places.parquet`), preferred when present.
    pub catalog_parquet: PathBuf,
    /// Delimited catalog source (`data/places.csv`), fallback.
    pub catalog_csv: PathBuf,
    /// Upstream itinerary-service configuration (`data/upstream-config.json`).
    pub upstream_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the root if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            catalog_parquet: root.join("places.parquet"),
            catalog_csv: root.join("places.csv"),
            upstream_config_file: root.join("upstream-config.json"),
            root,
        })
    }
}

/// Top-level Jalan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JalanConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
}

impl JalanConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self { port, data_paths })
    }
}
