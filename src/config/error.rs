//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} env variable is required")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Signature tolerance exceeds maximum allowed (3600 seconds)")]
    ToleranceTooLarge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_secret_message_names_the_variable() {
        let err = ValidationError::MissingRequired("SIGNING_SECRET");
        assert_eq!(err.to_string(), "SIGNING_SECRET env variable is required");
    }

    #[test]
    fn validation_error_converts_into_config_error() {
        let err: ConfigError = ValidationError::InvalidPort.into();
        assert_eq!(err.to_string(), "Validation failed: Invalid port number");
    }
}
