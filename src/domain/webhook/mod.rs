//! Webhook domain module.
//!
//! Verifies Stripe webhook deliveries and decodes them into lifecycle events.
//!
//! # Module Structure
//!
//! - `webhook_verifier` - `Stripe-Signature` parsing and HMAC-SHA256 verification
//! - `stripe_event` - Event envelope as sent by Stripe
//! - `lifecycle` - Typed subscription and payment-source events
//! - `webhook_errors` - Error taxonomy with HTTP status mapping

mod lifecycle;
mod stripe_event;
mod webhook_errors;
mod webhook_verifier;

pub use lifecycle::{LifecycleEvent, SubscriptionChange};
pub use stripe_event::{StripeEvent, StripeEventData, StripeEventType};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{SignatureHeader, StripeWebhookVerifier, DEFAULT_TOLERANCE_SECS};
