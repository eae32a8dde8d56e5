//! Webhook orchestrator service.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                ORCHESTRATOR                  │
//!                       │                                              │
//!   POST /api/execute   │  ┌─────────┐    ┌────────────┐               │
//!   ────────────────────┼─▶│  http   │───▶│ forwarding │───────────────┼──▶ n8n webhook
//!                       │  │ server  │    │  (1 call,  │               │
//!   ◀───────────────────┼──│         │◀───│  deadline) │◀──────────────┼───
//!                       │  │         │    └────────────┘               │
//!   GET /health         │  │         │    ┌────────────┐               │
//!   ────────────────────┼─▶│         │───▶│   health   │───────────────┼──▶ n8n health URL
//!                       │  └─────────┘    │   probe    │               │
//!                       │                 └────────────┘               │
//!                       │  config · observability · lifecycle          │
//!                       └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use orchestrator::config::load_from_env;
use orchestrator::lifecycle::signals::spawn_signal_handler;
use orchestrator::observability::{logging, metrics};
use orchestrator::{HttpServer, OrchestratorError, Shutdown};

#[derive(Parser)]
#[command(name = "orchestrator")]
#[command(about = "Forwards JSON payloads to an automation webhook", long_about = None)]
struct Args {
    /// Optional TOML config file (also read from ORCHESTRATOR_CONFIG).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), OrchestratorError> {
    let args = Args::parse();

    let mut config = load_from_env(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("orchestrator v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        webhook_url = %config.downstream.webhook_url,
        log_level = %config.observability.log_level,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let _signals = spawn_signal_handler(&shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
