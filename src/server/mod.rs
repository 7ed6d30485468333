//! HTTP surface for drug label lookups.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/healthz` | GET | Liveness check |
//! | `/drug` | POST | Label lookup by brand or generic name |
//! | `/interactions` | POST | Placeholder interaction summary |

mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::sources::openfda::OpenFdaClient;

#[derive(Clone)]
pub(crate) struct AppState {
    pub openfda: Arc<OpenFdaClient>,
}

pub(crate) fn router(state: AppState) -> Router {
    routes::router().with_state(state)
}

/// Runs the HTTP server on `host:port` until Ctrl-C.
///
/// # Errors
///
/// Returns an error when the host is invalid, the TCP bind fails, or the server stops abnormally.
pub async fn run_http(host: &str, port: u16, timeout: Duration) -> anyhow::Result<()> {
    let ip: std::net::IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host address: {e}"))?;
    let bind = std::net::SocketAddr::new(ip, port);

    let state = AppState {
        openfda: Arc::new(OpenFdaClient::new(timeout)?),
    };

    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP server: {e}"))?;

    tracing::info!("drug-checker listening on http://{bind}");
    tracing::info!("  health:       GET  http://{bind}/healthz");
    tracing::info!("  lookup:       POST http://{bind}/drug");
    tracing::info!("  interactions: POST http://{bind}/interactions");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down…");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
