//! In-memory lifecycle log for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::webhook::LifecycleEvent;
use crate::ports::LifecycleLog;

/// Captures recorded lifecycle events for assertions.
///
/// # Example
///
/// ```ignore
/// let log = Arc::new(InMemoryLifecycleLog::new());
/// // ... drive a webhook through the handler ...
/// assert_eq!(log.lines(), vec!["card deleted for customer cus_456"]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLifecycleLog {
    recorded: RwLock<Vec<LifecycleEvent>>,
}

impl InMemoryLifecycleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded events in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.recorded
            .read()
            .expect("InMemoryLifecycleLog: lock poisoned")
            .clone()
    }

    /// Returns the rendered log line of every recorded event.
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    pub fn count(&self) -> usize {
        self.recorded
            .read()
            .expect("InMemoryLifecycleLog: lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[async_trait]
impl LifecycleLog for InMemoryLifecycleLog {
    async fn record(&self, event: &LifecycleEvent) {
        self.recorded
            .write()
            .expect("InMemoryLifecycleLog: lock poisoned")
            .push(event.clone());
    }
}
