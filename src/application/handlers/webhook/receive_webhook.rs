//! ReceiveWebhookHandler - Command handler for verifying and dispatching Stripe webhooks.

use std::sync::Arc;

use crate::domain::webhook::{LifecycleEvent, StripeWebhookVerifier, WebhookError};
use crate::ports::LifecycleLog;

/// Command to handle a Stripe webhook delivery.
#[derive(Debug, Clone)]
pub struct ReceiveWebhookCommand {
    /// Raw webhook payload.
    pub payload: Vec<u8>,
    /// `Stripe-Signature` header value (empty when the header was absent).
    pub signature: String,
}

/// Result of webhook processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveWebhookResult {
    /// Recognised event, one line written to the lifecycle log.
    Recorded(LifecycleEvent),
    /// Recognised event with a missing or mistyped field; acknowledged, not logged.
    Malformed {
        event_type: String,
        field: &'static str,
    },
    /// Event type we do not act on.
    Ignored { event_type: String },
}

/// Handler for Stripe webhook deliveries.
///
/// Verifies the signature before anything in the payload is read, then
/// dispatches on the decoded lifecycle event.
pub struct ReceiveWebhookHandler {
    verifier: Arc<StripeWebhookVerifier>,
    lifecycle_log: Arc<dyn LifecycleLog>,
}

impl ReceiveWebhookHandler {
    pub fn new(verifier: Arc<StripeWebhookVerifier>, lifecycle_log: Arc<dyn LifecycleLog>) -> Self {
        Self {
            verifier,
            lifecycle_log,
        }
    }

    /// Verifies and dispatches one delivery.
    ///
    /// # Errors
    ///
    /// Only verification failures are returned. A malformed field on a
    /// verified event is reported as [`ReceiveWebhookResult::Malformed`].
    pub async fn handle(
        &self,
        cmd: ReceiveWebhookCommand,
    ) -> Result<ReceiveWebhookResult, WebhookError> {
        // 1. Verify webhook signature and parse event
        let event = self
            .verifier
            .verify_and_parse(&cmd.payload, &cmd.signature)?;

        // 2. Decode and dispatch by event type
        match LifecycleEvent::from_stripe(&event) {
            Ok(LifecycleEvent::Unhandled { event_type }) => {
                tracing::debug!(
                    event_id = %event.id,
                    event_type = %event_type,
                    livemode = event.is_live(),
                    "Ignoring webhook event"
                );
                Ok(ReceiveWebhookResult::Ignored { event_type })
            }
            Ok(lifecycle) => {
                tracing::debug!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    livemode = event.is_live(),
                    "Recording lifecycle event"
                );
                self.lifecycle_log.record(&lifecycle).await;
                Ok(ReceiveWebhookResult::Recorded(lifecycle))
            }
            Err(WebhookError::MalformedEventField(field)) => {
                tracing::warn!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    "{} key missing from event data object",
                    field
                );
                Ok(ReceiveWebhookResult::Malformed {
                    event_type: event.event_type,
                    field,
                })
            }
            Err(other) => Err(other),
        }
    }
}
