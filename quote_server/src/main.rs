//! Quote HTTP server.
//!
//! Serves `GET /cotacao`: every request calls the upstream USD-BRL API with a
//! 200 ms deadline, answers `{"bid": "..."}` and records the bid into SQLite on
//! a detached task bounded by 10 ms.
//!
//! Startup order: open the store and create the table, build the upstream
//! client, bind the listener. Any failure there aborts the process with a
//! non-zero exit code. Once serving, the process runs until Ctrl+C or SIGTERM,
//! drains in-flight requests and closes the store.
//!
//! Usage example (CLI):
//! ```bash
//! quote_server --listen-addr 0.0.0.0:8080 --database-url sqlite://cotacoes.db
//! ```
#![warn(missing_docs)]
mod args;

use std::sync::Arc;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_server::ServerError;
use quote_server::router::{QuoteState, quote_router};
use quote_server::store::SqliteStore;
use quote_server::upstream::UpstreamClient;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_logger();
    let args = Args::parse();

    let store = SqliteStore::open(&args.database_url)
        .await
        .inspect_err(|e| error!("Failed to initialise database {}: {}", args.database_url, e))?;
    let upstream = UpstreamClient::new(&args.upstream_url)?;
    let state = QuoteState::new(upstream, Arc::new(store.clone()));

    let listener = TcpListener::bind(&args.listen_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", args.listen_addr, e))?;
    info!(
        "Quote server listening on {} (upstream: {})",
        listener.local_addr()?,
        args.upstream_url
    );

    axum::serve(listener, quote_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
