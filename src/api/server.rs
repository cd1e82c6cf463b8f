use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use super::{
    services::{get_metrics, get_sources, health},
    state::AppState,
};
use crate::config::Config;
use crate::resolver::SourceResolver;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the API router around an existing state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sources", get(get_sources))
        .route("/operators/metrics", get(get_metrics))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run(config: Config, address: SocketAddr) -> Result<(), AnyError> {
    let resolver = SourceResolver::from_config(&config)
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
    info!(strategies = ?config.extractor.strategies, "Resolver ready");

    let app = router(AppState::new(resolver));

    let listener = TcpListener::bind(address).await?;
    info!(%address, "embedsrc API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
