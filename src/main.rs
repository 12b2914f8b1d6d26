use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use api_relay::config::load_config;
use api_relay::observability::{init_metrics, init_tracing};
use api_relay::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "api-relay", version)]
#[command(about = "Relays /api/data to a third-party REST API", long_about = None)]
struct Args {
    /// Optional TOML configuration file. `PORT` overrides the listener port.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    init_tracing(&config.observability);

    tracing::info!("api-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.resource_url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        docs_enabled = config.docs.enabled,
        "Configuration loaded"
    );

    if config.upstream.timeout_secs.is_none() {
        tracing::warn!("No upstream timeout configured; a stalled upstream call keeps its request open");
    }

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let public_url = config.listener.public_url();

    tracing::info!("Server is running on {}", public_url);
    if config.docs.enabled {
        tracing::info!("API documentation at {}{}", public_url, config.docs.path);
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_signal());

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
