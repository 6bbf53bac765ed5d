//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, services and router, then runs Axum until a
//! shutdown signal arrives.

use crate::application::services::SubscriptionService;
use crate::config::Config;
use crate::domain::backend::BackendClient;
use crate::domain::click_tracker::ClickTracker;
use crate::infrastructure::backend::HttpBackendClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// # Errors
///
/// Returns an error if the backend base URL is unusable or the HTTP client
/// cannot be created.
pub fn build_state(config: &Config) -> Result<AppState> {
    let backend: Arc<dyn BackendClient> = Arc::new(
        HttpBackendClient::new(&config.backend_base_url, config.backend_timeout())
            .context("Failed to create backend client")?,
    );

    let subscription_service = Arc::new(SubscriptionService::new(
        backend.clone(),
        &config.frontend_base_url,
    ));
    let click_tracker = ClickTracker::new(backend, config.click_retry_delay());

    Ok(AppState::new(subscription_service, click_tracker))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State or router construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Backend client ready for {}", config.backend_base_url);

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
