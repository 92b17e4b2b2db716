//! WebSocket echo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client                 ┌──────────────────────────────────────────┐
//!     ──── upgrade ─────────▶│  axum::serve ──▶ upgrade_handler         │
//!                            │                      │ spawn             │
//!     ◀─── greeting ─────────│                      ▼                   │
//!     ──── M ───────────────▶│                 run_session              │
//!     ◀─── prefix + M ───────│            (greeting, echo loop,         │
//!                            │             disconnect log)              │
//!                            │                                          │
//!                            │  config · observability · lifecycle      │
//!                            └──────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use echo_websocket::config::{load_config, validation::validate_config, ConfigError, EchoConfig};
use echo_websocket::lifecycle::startup;
use echo_websocket::observability::logging;

#[derive(Parser)]
#[command(name = "echo-websocket")]
#[command(about = "WebSocket server that greets clients and echoes their messages", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EchoConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level);
    tracing::info!("echo-websocket v{} starting", env!("CARGO_PKG_VERSION"));

    startup::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
