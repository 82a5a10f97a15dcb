//! Upstream service configuration persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.jamaibase.com";
pub const DEFAULT_TABLE_ID: &str = "TripPlanner";

/// Stored upstream configuration (persisted to upstream-config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_table_id")]
    pub table_id: String,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_table_id() -> String {
    DEFAULT_TABLE_ID.into()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            project_id: None,
            table_id: DEFAULT_TABLE_ID.into(),
            config_path: PathBuf::new(),
        }
    }
}

/// Credentials and routing resolved from a complete configuration.
#[derive(Debug, Clone)]
pub struct ResolvedUpstream {
    pub base_url: String,
    pub api_key: String,
    pub project_id: String,
    pub table_id: String,
}

/// Partial update from the config endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamConfigUpdate {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub table_id: Option<String>,
}

/// Public view of the configuration (key never exposed).
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamConfigResponse {
    pub configured: bool,
    pub base_url: String,
    pub project_id: Option<String>,
    pub table_id: String,
    pub api_key_configured: bool,
}

impl UpstreamConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config: UpstreamConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        config.config_path = config_path.to_path_buf();

        // Env vars as fallback
        if let Ok(url) = std::env::var("JALAN_UPSTREAM_URL") {
            config.base_url = url;
        }
        if config.api_key.is_none() {
            config.api_key = std::env::var("JALAN_UPSTREAM_API_KEY").ok();
        }
        if config.project_id.is_none() {
            config.project_id = std::env::var("JALAN_UPSTREAM_PROJECT_ID").ok();
        }

        config
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved upstream config to {}", self.config_path.display());
        Ok(())
    }

    /// Apply an update, merging with existing config.
    pub fn apply_update(&mut self, update: &UpstreamConfigUpdate) {
        if let Some(u) = &update.base_url {
            self.base_url = u.clone();
        }
        if let Some(k) = &update.api_key {
            self.api_key = Some(k.clone());
        }
        if let Some(p) = &update.project_id {
            self.project_id = Some(p.clone());
        }
        if let Some(t) = &update.table_id {
            self.table_id = t.clone();
        }
    }

    /// Resolve credentials; `None` until both key and project are set.
    pub fn resolve(&self) -> Option<ResolvedUpstream> {
        let api_key = self.api_key.clone()?;
        let project_id = self.project_id.clone()?;
        Some(ResolvedUpstream {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            project_id,
            table_id: self.table_id.clone(),
        })
    }

    /// Build the public config response (no API key exposed).
    pub fn to_response(&self) -> UpstreamConfigResponse {
        UpstreamConfigResponse {
            configured: self.resolve().is_some(),
            base_url: self.base_url.clone(),
            project_id: self.project_id.clone(),
            table_id: self.table_id.clone(),
            api_key_configured: self.api_key.is_some(),
        }
    }
}
