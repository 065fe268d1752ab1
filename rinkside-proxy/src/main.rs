mod cli;
mod feeds;
mod geocode;
mod server;
mod state;

use std::env;
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};
use tokio::net::TcpListener;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());
    let state = Arc::new(AppState::new(args.feeds, args.geocoder_token));

    // A failed initial fetch is not fatal; clients get 503 until a
    // refresh succeeds.
    match state.refresh().await {
        Ok(snapshot) => info!(
            "Loaded initial schedule data ({} main sessions)",
            snapshot.main.sessions.len()
        ),
        Err(err) => warn!("Initial schedule fetch failed: {err}"),
    }

    let listener = TcpListener::bind(args.address).await?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn setup_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", concat!(env!("CARGO_CRATE_NAME"), "=info"));
    }

    pretty_env_logger::init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for the shutdown signal: {err}");
    }
}
