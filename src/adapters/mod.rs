//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes for the webhook endpoint
//! - `logging` - Lifecycle log implementations (tracing, in-memory)

pub mod http;
pub mod logging;

pub use logging::{InMemoryLifecycleLog, TracingLifecycleLog};
