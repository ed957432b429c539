//! Webhook command handlers.

mod receive_webhook;

pub use receive_webhook::{ReceiveWebhookCommand, ReceiveWebhookHandler, ReceiveWebhookResult};
