use std::sync::Arc;

use docext_core::ServiceConfig;
use docext_server::{spawn_retention_sweeper, start_server, ApiState};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // LOG_LEVEL keeps parity with older deployments; RUST_LOG wins.
            match std::env::var("LOG_LEVEL") {
                Ok(level) => EnvFilter::new(level.to_lowercase()),
                Err(_) => EnvFilter::new("docext_server=info,docext_core=info,tower_http=info"),
            }
        }))
        .init();

    let config = ServiceConfig::from_env();
    config.ensure_dirs()?;

    if config.auth_enabled() {
        info!("API key authentication enabled");
    } else {
        info!("API key authentication disabled (API_KEY not set)");
    }
    info!(
        "upload dir {}, max file size {} bytes, retention {}h",
        config.upload_dir.display(),
        config.max_file_size,
        config.retention_hours
    );

    let state = ApiState::new(config);
    spawn_retention_sweeper(Arc::clone(&state.config));

    let addr =
        std::env::var("DOCEXT_SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    start_server(&addr, state).await?;

    Ok(())
}
