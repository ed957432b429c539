//! Tracing subscriber initialization.
//!
//! All log output goes to stdout through a `tracing_subscriber::fmt`
//! subscriber. `RUST_LOG` wins over the configured filter when set.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Builds the filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init(config: &ServerConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
