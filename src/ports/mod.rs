//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LifecycleLog` - Destination for recognised lifecycle events

mod lifecycle_log;

pub use lifecycle_log::LifecycleLog;
