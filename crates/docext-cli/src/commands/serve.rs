//! Serve command - run the HTTP service.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use docext_core::ServiceConfig;
use docext_server::{spawn_retention_sweeper, start_server, ApiState};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    addr: String,

    /// Upload directory (default: from environment or "uploads")
    #[arg(short, long)]
    upload_dir: Option<PathBuf>,

    /// API key; overrides the API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServiceConfig::from_env();
    if let Some(dir) = args.upload_dir {
        config.upload_dir = dir;
    }
    if let Some(key) = args.api_key {
        config.api_key = Some(key);
    }
    config.ensure_dirs()?;

    info!(
        "serving on {} (auth {})",
        args.addr,
        if config.auth_enabled() { "on" } else { "off" }
    );

    let state = ApiState::new(config);
    spawn_retention_sweeper(Arc::clone(&state.config));
    start_server(&args.addr, state).await?;

    Ok(())
}
