//! Server bootstrap: state wiring, listener bind, serve loop and shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::adapters::http::webhook::{webhook_router, WebhookAppState, WEBHOOK_PATH};
use crate::adapters::logging::TracingLifecycleLog;
use crate::config::{AppConfig, ValidationError, WebhookConfig};
use crate::domain::webhook::StripeWebhookVerifier;

/// Fatal server errors. Each one terminates the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ValidationError),

    #[error("listen: failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("listen: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the request state from webhook configuration.
///
/// # Errors
///
/// `MissingRequired("SIGNING_SECRET")` when no secret is configured.
pub fn build_state(config: &WebhookConfig) -> Result<WebhookAppState, ValidationError> {
    let secret = config
        .secret()
        .ok_or(ValidationError::MissingRequired("SIGNING_SECRET"))?;

    let verifier = StripeWebhookVerifier::new(secret.expose_secret().as_str())
        .with_tolerance(config.tolerance_secs);

    Ok(WebhookAppState::new(
        Arc::new(verifier),
        Arc::new(TracingLifecycleLog::new()),
    ))
}

/// Binds the TCP listener.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns `Ok(())`.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Runs the webhook receiver with the given configuration.
///
/// Returns `Ok(())` after a signal-driven graceful shutdown.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let state = build_state(&config.webhook)?;
    let addr = config.server.socket_addr()?;

    let listener = bind(addr).await?;
    tracing::info!(
        address = %addr,
        "Receiving Stripe webhooks on {}",
        config.server.public_url(WEBHOOK_PATH)
    );

    serve(listener, webhook_router(state), shutdown_signal()).await
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
