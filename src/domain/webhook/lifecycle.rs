//! Lifecycle events decoded from verified Stripe events.
//!
//! The Stripe data object is free-form JSON. This module turns it into a
//! tagged variant per recognised event type, so that a missing or mistyped
//! field surfaces as [`WebhookError::MalformedEventField`] instead of being
//! coerced away.

use std::fmt;

use super::stripe_event::{StripeEvent, StripeEventType};
use super::webhook_errors::WebhookError;

/// Which subscription event was received.
///
/// Updates and deletions are handled identically; the kind is kept so log
/// lines still say which one arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionChange {
    Updated,
    Deleted,
}

impl SubscriptionChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// A customer lifecycle occurrence, built only from a verified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// `customer.subscription.updated` or `customer.subscription.deleted`.
    SubscriptionChanged {
        change: SubscriptionChange,
        customer_id: String,
        status: String,
    },
    /// `customer.source.deleted`: a card was removed.
    PaymentSourceDeleted { customer_id: String },
    /// Any other event type. Acknowledged, never logged as lifecycle.
    Unhandled { event_type: String },
}

impl LifecycleEvent {
    /// Decodes a verified Stripe event.
    ///
    /// # Errors
    ///
    /// `MalformedEventField` names the first required field that is absent
    /// or not a string. `customer` is checked before `status`.
    pub fn from_stripe(event: &StripeEvent) -> Result<Self, WebhookError> {
        let decoded = match event.parsed_type() {
            StripeEventType::CustomerSubscriptionUpdated => {
                Self::subscription_changed(event, SubscriptionChange::Updated)?
            }
            StripeEventType::CustomerSubscriptionDeleted => {
                Self::subscription_changed(event, SubscriptionChange::Deleted)?
            }
            StripeEventType::CustomerSourceDeleted => Self::PaymentSourceDeleted {
                customer_id: required_str(event, "customer")?,
            },
            StripeEventType::Unknown => Self::Unhandled {
                event_type: event.event_type.clone(),
            },
        };
        Ok(decoded)
    }

    fn subscription_changed(
        event: &StripeEvent,
        change: SubscriptionChange,
    ) -> Result<Self, WebhookError> {
        let customer_id = required_str(event, "customer")?;
        let status = required_str(event, "status")?;
        Ok(Self::SubscriptionChanged {
            change,
            customer_id,
            status,
        })
    }
}

/// The human-readable log line for this event.
impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubscriptionChanged {
                change,
                customer_id,
                status,
            } => write!(
                f,
                "customer {} subscription {}, current status: {}",
                customer_id,
                change.as_str(),
                status
            ),
            Self::PaymentSourceDeleted { customer_id } => {
                write!(f, "card deleted for customer {}", customer_id)
            }
            Self::Unhandled { event_type } => write!(f, "unhandled event type {}", event_type),
        }
    }
}

fn required_str(event: &StripeEvent, field: &'static str) -> Result<String, WebhookError> {
    event
        .object_str(field)
        .map(str::to_owned)
        .ok_or(WebhookError::MalformedEventField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> StripeEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn decodes_subscription_updated() {
        let decoded = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.subscription.updated",
            "data": {"object": {"customer": "cus_123", "status": "active"}}
        })))
        .unwrap();

        assert_eq!(
            decoded,
            LifecycleEvent::SubscriptionChanged {
                change: SubscriptionChange::Updated,
                customer_id: "cus_123".to_string(),
                status: "active".to_string(),
            }
        );
        assert_eq!(
            decoded.to_string(),
            "customer cus_123 subscription updated, current status: active"
        );
    }

    #[test]
    fn subscription_deleted_shares_the_category() {
        let decoded = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.subscription.deleted",
            "data": {"object": {"customer": "cus_9", "status": "canceled"}}
        })))
        .unwrap();

        assert!(matches!(
            decoded,
            LifecycleEvent::SubscriptionChanged {
                change: SubscriptionChange::Deleted,
                ..
            }
        ));
        assert_eq!(
            decoded.to_string(),
            "customer cus_9 subscription deleted, current status: canceled"
        );
    }

    #[test]
    fn decodes_source_deleted() {
        let decoded = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.source.deleted",
            "data": {"object": {"customer": "cus_456"}}
        })))
        .unwrap();

        assert_eq!(
            decoded,
            LifecycleEvent::PaymentSourceDeleted {
                customer_id: "cus_456".to_string()
            }
        );
        assert_eq!(decoded.to_string(), "card deleted for customer cus_456");
    }

    #[test]
    fn unknown_type_is_unhandled() {
        let decoded = LifecycleEvent::from_stripe(&event(json!({
            "type": "invoice.paid",
            "data": {"object": {}}
        })))
        .unwrap();

        assert_eq!(
            decoded,
            LifecycleEvent::Unhandled {
                event_type: "invoice.paid".to_string()
            }
        );
    }

    #[test]
    fn missing_customer_is_malformed() {
        let result = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.subscription.updated",
            "data": {"object": {"status": "active"}}
        })));

        assert_eq!(result, Err(WebhookError::MalformedEventField("customer")));
    }

    #[test]
    fn customer_is_checked_before_status() {
        let result = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.subscription.deleted",
            "data": {"object": {}}
        })));

        assert_eq!(result, Err(WebhookError::MalformedEventField("customer")));
    }

    #[test]
    fn non_string_status_is_malformed() {
        let result = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.subscription.updated",
            "data": {"object": {"customer": "cus_1", "status": 3}}
        })));

        assert_eq!(result, Err(WebhookError::MalformedEventField("status")));
    }

    #[test]
    fn source_deleted_does_not_require_status() {
        let result = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.source.deleted",
            "data": {"object": {"customer": "cus_2"}}
        })));

        assert!(result.is_ok());
    }

    #[test]
    fn source_deleted_with_expanded_customer_is_malformed() {
        let result = LifecycleEvent::from_stripe(&event(json!({
            "type": "customer.source.deleted",
            "data": {"object": {"customer": {"id": "cus_2"}}}
        })));

        assert_eq!(result, Err(WebhookError::MalformedEventField("customer")));
    }
}
