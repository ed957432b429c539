//! HTTP adapter for the Stripe webhook endpoint.
//!
//! - `POST /stripe` - Verify and dispatch a Stripe webhook

mod handlers;
mod routes;

pub use handlers::{
    handle_stripe_webhook, WebhookApiError, WebhookAppState, STRIPE_SIGNATURE_HEADER,
};
pub use routes::{webhook_router, webhook_routes, WEBHOOK_PATH};
