//! LifecycleLog port - Interface for recording customer lifecycle events.
//!
//! The webhook handler decides *what* happened; this port decides where the
//! resulting line goes (stdout in production, memory in tests).

use async_trait::async_trait;

use crate::domain::webhook::LifecycleEvent;

/// Port for recording lifecycle events decoded from verified webhooks.
///
/// Implementations must ensure:
/// - One call produces exactly one log entry
/// - Recording never fails the webhook request
///
/// Only recognised events are passed in; unhandled event types never reach
/// this port.
#[async_trait]
pub trait LifecycleLog: Send + Sync {
    /// Record a single lifecycle event.
    async fn record(&self, event: &LifecycleEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn LifecycleLog) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn lifecycle_log_is_send_sync() {
        fn check<T: LifecycleLog>() {
            assert_send_sync::<T>();
        }
        let _ = check::<crate::adapters::logging::InMemoryLifecycleLog>;
    }
}
