//! Jalan — tourism-information backend server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("JALAN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = jalan_core::JalanConfig::from_env(&data_dir)?;
    let port = config.port;

    // Load the place catalog once; everything downstream gets a read-only
    // handle. Missing data is fatal here, never per-request.
    let catalog = jalan_catalog::Catalog::load(&config.data_paths)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {e}"))?;
    info!("Catalog loaded: {} places", catalog.len());

    let state = Arc::new(AppState::new(config, catalog));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Jalan server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
