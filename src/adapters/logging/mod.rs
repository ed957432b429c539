//! Lifecycle log adapters.
//!
//! - `TracingLifecycleLog` - writes each event as a `tracing` line (stdout)
//! - `InMemoryLifecycleLog` - captures events for test assertions

mod in_memory;
mod tracing_log;

pub use in_memory::InMemoryLifecycleLog;
pub use tracing_log::TracingLifecycleLog;
