use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};

use playox_server::{
    server::{self, AppState},
    tictactoe::RandomSelector,
};

const LOCALHOST_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "playox-server", version, about)]
struct Args {
    /// IP address to bind the server to
    #[arg(short, long, default_value_t = LOCALHOST_ADDR)]
    addr: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Directory of static files served at `/`
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Seed for a reproducible opponent
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

/// Completes when Ctrl+C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    log::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    let opponent = match args.seed {
        Some(seed) => {
            log::info!("Opponent seeded with {seed}");
            RandomSelector::seeded(seed)
        }
        None => RandomSelector::new(),
    };
    let state = AppState::new(opponent);

    let mut app = Router::new().nest("/api", server::router(state));
    if let Some(dir) = args.static_dir {
        log::info!("Serving static files from {dir:?}");
        app = app.fallback_service(ServeDir::new(dir));
    }
    let app = app.layer(CorsLayer::permissive());

    let socket_addr = SocketAddr::new(args.addr, args.port);
    let listener = TcpListener::bind(socket_addr)
        .await
        .with_context(|| format!("Failed to bind listener to {socket_addr}"))?;
    log::info!("Listening at {socket_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Server error")?;

    log::info!("Server shut down");
    Ok(())
}
