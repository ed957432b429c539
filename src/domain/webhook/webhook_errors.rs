//! Webhook error types for Stripe webhook handling.
//!
//! Defines all error conditions that can occur during webhook processing,
//! with HTTP status code mapping.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook processing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// Webhook signature verification failed.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Webhook timestamp is older than the tolerance window.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Failed to parse webhook payload or signature header.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A recognised event is missing a required string field.
    #[error("{0} key missing from event data object")]
    MalformedEventField(&'static str),
}

impl WebhookError {
    /// Returns true if the request must be treated as unauthenticated.
    ///
    /// Nothing from the payload may be acted upon after one of these.
    pub fn is_verification_failure(&self) -> bool {
        !matches!(self, WebhookError::MalformedEventField(_))
    }

    /// Maps the error to an appropriate HTTP status code.
    ///
    /// A malformed field on a verified event is still acknowledged: the
    /// payload shape is not under our control and redelivery would not fix it.
    pub fn status_code(&self) -> StatusCode {
        if self.is_verification_failure() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        }
    }
}
