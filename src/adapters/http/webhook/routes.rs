//! Axum router configuration for the webhook endpoint.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{handle_stripe_webhook, WebhookAppState};

/// Path Stripe delivers webhooks to.
pub const WEBHOOK_PATH: &str = "/stripe";

/// Create the Stripe webhook routes.
///
/// # Routes
/// - `POST /stripe` - Handle Stripe webhooks (no auth, signature verified)
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route(WEBHOOK_PATH, post(handle_stripe_webhook))
}

/// Create the complete service router with state applied.
///
/// Body size is not limited and every request is traced.
pub fn webhook_router(state: WebhookAppState) -> Router {
    webhook_routes()
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
