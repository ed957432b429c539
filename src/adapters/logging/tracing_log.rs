//! Lifecycle log backed by `tracing`.

use async_trait::async_trait;

use crate::domain::webhook::LifecycleEvent;
use crate::ports::LifecycleLog;

/// Writes lifecycle events through the global `tracing` subscriber.
///
/// The message is the human-readable line; customer id, status and change
/// kind are attached as fields so JSON output stays queryable.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLifecycleLog;

impl TracingLifecycleLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LifecycleLog for TracingLifecycleLog {
    async fn record(&self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::SubscriptionChanged {
                change,
                customer_id,
                status,
            } => {
                tracing::info!(
                    customer = %customer_id,
                    status = %status,
                    change = change.as_str(),
                    "{}",
                    event
                );
            }
            LifecycleEvent::PaymentSourceDeleted { customer_id } => {
                tracing::info!(customer = %customer_id, "{}", event);
            }
            LifecycleEvent::Unhandled { event_type } => {
                tracing::debug!(event_type = %event_type, "{}", event);
            }
        }
    }
}
