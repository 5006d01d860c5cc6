//! attendance-engine - serves attendance computed from terminal punch data

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use attendance_engine::api::{create_router, AppState};
use attendance_engine::config::ConfigLoader;
use attendance_engine::source::MemoryPunchSource;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// attendance-engine - Attendance analytics for biometric terminal punches
#[derive(Parser, Debug)]
#[command(name = "attendance-engine")]
#[command(about = "Attendance analytics for biometric terminal punches", long_about = None)]
struct Args {
    /// Directory holding engine.yaml and report.yaml
    #[arg(short, long, default_value = "./config/default")]
    config: PathBuf,

    /// Punch snapshot (employees and transactions) in JSON
    #[arg(short, long, env = "ATTENDANCE_PUNCHES", default_value = "./data/punches.sample.json")]
    punches: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "ATTENDANCE_BIND", default_value = "0.0.0.0:5000")]
    bind: SocketAddr,

    /// Log level (overridden by RUST_LOG)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "attendance-engine starting"
    );

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    info!(site = %config.config().site(), "Configuration loaded");

    let source = MemoryPunchSource::load(&args.punches)
        .with_context(|| format!("loading punch data from {}", args.punches.display()))?;

    let router = create_router(AppState::new(config, source));
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!(address = %args.bind, "Listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
