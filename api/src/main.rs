//! Pastry menu API server.
//!
//! Usage:
//!   pastry-api --port 1338 --profile full
//!
//! The menu lives in memory only and resets on restart.

use anyhow::{Context, Result};
use clap::Parser;
use pastry_api::{Args, build_router};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Pastry API starting...");
    let state = args.app_state();
    info!(profile = %args.profile, seeded = !args.empty, "menu ready");

    let addr = args.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP address {addr}"))?;
    info!("Server is running on port: {}", args.port);

    axum::serve(listener, build_router(state))
        .await
        .context("HTTP server failed")?;
    Ok(())
}
