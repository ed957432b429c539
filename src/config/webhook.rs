//! Webhook configuration (Stripe signing secret)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for the signature tolerance window.
const MAX_TOLERANCE_SECS: u64 = 3600;

/// Webhook configuration
#[derive(Debug, Deserialize)]
pub struct WebhookConfig {
    /// Stripe webhook signing secret, read from `SIGNING_SECRET`
    #[serde(default)]
    pub signing_secret: Option<SecretString>,

    /// Maximum accepted age of a signature timestamp, in seconds
    #[serde(default = "default_tolerance_secs")]
    pub tolerance_secs: u64,
}

impl WebhookConfig {
    /// Returns the signing secret if one is configured and non-empty.
    pub fn secret(&self) -> Option<&SecretString> {
        self.signing_secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
    }

    /// Check whether the secret looks like a Stripe endpoint secret
    pub fn has_stripe_prefix(&self) -> bool {
        self.secret()
            .map(|secret| secret.expose_secret().starts_with("whsec_"))
            .unwrap_or(false)
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret().is_none() {
            return Err(ValidationError::MissingRequired("SIGNING_SECRET"));
        }
        if self.tolerance_secs > MAX_TOLERANCE_SECS {
            return Err(ValidationError::ToleranceTooLarge);
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            tolerance_secs: default_tolerance_secs(),
        }
    }
}

fn default_tolerance_secs() -> u64 {
    300
}
