//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. The signing secret is read from
//! `SIGNING_SECRET`; optional overrides use the `WEBHOOK_RECEIVER_` prefix and
//! nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use stripe_webhook_receiver::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Environment variable holding the Stripe endpoint secret.
pub const SIGNING_SECRET_VAR: &str = "SIGNING_SECRET";

/// Prefix for optional configuration overrides.
pub const ENV_PREFIX: &str = "WEBHOOK_RECEIVER";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Webhook verification configuration (secret, tolerance)
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WEBHOOK_RECEIVER` prefix
    /// 3. Reads the signing secret from `SIGNING_SECRET`
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WEBHOOK_RECEIVER__SERVER__PORT=9000` -> `server.port = 9000`
    /// - `WEBHOOK_RECEIVER__WEBHOOK__TOLERANCE_SECS=600` -> `webhook.tolerance_secs = 600`
    ///
    /// A missing secret is not a load error; [`AppConfig::validate`] reports it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .set_override_option(
                "webhook.signing_secret",
                std::env::var(SIGNING_SECRET_VAR).ok(),
            )?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.webhook.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var(SIGNING_SECRET_VAR);
        env::remove_var("WEBHOOK_RECEIVER__SERVER__PORT");
        env::remove_var("WEBHOOK_RECEIVER__SERVER__LOG_FORMAT");
        env::remove_var("WEBHOOK_RECEIVER__WEBHOOK__TOLERANCE_SECS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(SIGNING_SECRET_VAR, "whsec_from_env");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.webhook.secret().is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("SIGNING_SECRET"))
        );
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(SIGNING_SECRET_VAR, "whsec_defaults");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.webhook.tolerance_secs, 300);
    }

    #[test]
    fn test_prefixed_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(SIGNING_SECRET_VAR, "whsec_overrides");
        env::set_var("WEBHOOK_RECEIVER__SERVER__PORT", "3000");
        env::set_var("WEBHOOK_RECEIVER__SERVER__LOG_FORMAT", "json");
        env::set_var("WEBHOOK_RECEIVER__WEBHOOK__TOLERANCE_SECS", "600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.webhook.tolerance_secs, 600);
    }
}
