//! HTTP server for the contact relay.
//!
//! Exposes `POST /api/contact` and a `/health` probe over axum.

pub mod handlers;

pub use handlers::{create_router, AppState};

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serve `router` on `addr` until Ctrl-C.
///
/// # Returns
/// An error if the listener cannot be bound or the server fails
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
