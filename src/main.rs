//! Chartboard server
//!
//! Serves the interactive dashboard on a local port.
//!
//! # Configuration
//!
//! Config file (TOML) from `--config`, the platform config dir, or
//! `./config.toml`; environment variables override:
//! - `CHARTBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `CHARTBOARD_PORT`: Port to listen on (default: 8050)
//! - `CHARTBOARD_LOG_LEVEL`: Log level (default: info)
//! - `CHARTBOARD_LOG_FORMAT`: Log format, pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely when set

use chartboard::api::{serve, AppState};
use chartboard::config::Config;
use chartboard::datasets::DatasetStore;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive Line & Pie Charts dashboard server
#[derive(Debug, Parser)]
#[command(name = "chartboard", version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration, CLI flags win over file and environment
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting Chartboard v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(DatasetStore::builtin());
    tracing::info!(
        "Dataset store ready: {} datasets, default '{}'",
        store.len(),
        store.default_id()
    );

    let state = AppState::new(store, config.server.clone());

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("Chartboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "chartboard={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
