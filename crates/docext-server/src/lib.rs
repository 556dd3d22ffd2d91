//! HTTP service for PDF conversion and invoice extraction.
//!
//! Endpoints:
//! - `GET /health` — liveness and converter readiness
//! - `POST /convert/markdown` — multipart PDF upload, Markdown out
//! - `POST /convert/json` — multipart PDF upload, structured JSON out
//! - `POST /extract/invoice` — multipart PDF upload, best-effort invoice fields

mod auth;
mod handlers;
mod types;
mod upload;

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use docext_core::{DocumentConverter, ServiceConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

pub use auth::API_KEY_HEADER;
pub use types::*;
pub use upload::TempUpload;

/// Interval between retention sweeps.
const SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// Shared state for all handlers.
#[derive(Clone)]
pub struct ApiState {
    /// Process-wide converter, initialized once at startup.
    pub converter: Arc<DocumentConverter>,
    /// Service configuration.
    pub config: Arc<ServiceConfig>,
}

impl ApiState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            converter: Arc::new(DocumentConverter::new()),
            config: Arc::new(config),
        }
    }
}

/// Build the API router with all endpoints and middleware.
pub fn build_router(state: ApiState) -> Router {
    // Body limit sits above the file limit so the handler can respond with
    // a descriptive 400 at the exact configured size.
    let body_limit = state.config.max_file_size + 1024 * 1024;

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health_check))
        .route("/convert/markdown", post(handlers::convert_markdown))
        .route("/convert/json", post(handlers::convert_json))
        .route("/extract/invoice", post(handlers::extract_invoice))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the API server.
pub async fn start_server(addr: &str, state: ApiState) -> Result<(), std::io::Error> {
    info!("starting docext server on {}", addr);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await
}

/// Spawn the retention sweeper: periodically deletes upload-dir files older
/// than the retention window. Uploads are normally removed when their
/// request completes; this catches files orphaned by an unclean shutdown.
pub fn spawn_retention_sweeper(config: Arc<ServiceConfig>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            match sweep_expired(&config) {
                Ok(0) => {}
                Ok(n) => info!("retention sweep removed {} expired file(s)", n),
                Err(e) => warn!("retention sweep failed: {}", e),
            }
        }
    })
}

/// Remove files older than the retention window. Returns the number removed.
pub fn sweep_expired(config: &ServiceConfig) -> std::io::Result<usize> {
    let cutoff = Duration::from_secs(config.retention_hours * 3600);
    let mut removed = 0;

    for entry in std::fs::read_dir(&config.upload_dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }

        let age = metadata
            .modified()
            .ok()
            .and_then(|m| SystemTime::now().duration_since(m).ok());

        if age.is_some_and(|a| a > cutoff) {
            match std::fs::remove_file(entry.path()) {
                Ok(()) => {
                    debug!("removed expired file {}", entry.path().display());
                    removed += 1;
                }
                Err(e) => warn!("could not remove {}: {}", entry.path().display(), e),
            }
        }
    }

    Ok(removed)
}
