//! HTTP handlers for the webhook endpoint.
//!
//! These handlers connect Axum routes to the application layer command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::webhook::{ReceiveWebhookCommand, ReceiveWebhookHandler};
use crate::domain::webhook::{StripeWebhookVerifier, WebhookError};
use crate::ports::LifecycleLog;

/// Header carrying the Stripe signature.
pub const STRIPE_SIGNATURE_HEADER: &str = "stripe-signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped and read-only.
#[derive(Clone)]
pub struct WebhookAppState {
    pub verifier: Arc<StripeWebhookVerifier>,
    pub lifecycle_log: Arc<dyn LifecycleLog>,
}

impl WebhookAppState {
    pub fn new(verifier: Arc<StripeWebhookVerifier>, lifecycle_log: Arc<dyn LifecycleLog>) -> Self {
        Self {
            verifier,
            lifecycle_log,
        }
    }

    /// Create the command handler from the shared state.
    pub fn webhook_handler(&self) -> ReceiveWebhookHandler {
        ReceiveWebhookHandler::new(self.verifier.clone(), self.lifecycle_log.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /stripe - Handle Stripe webhook events
///
/// Responds 200 with an empty body once the signature verifies, whatever the
/// event type or payload shape.
pub async fn handle_stripe_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, WebhookApiError> {
    let body = body.map_err(WebhookApiError::BodyUnreadable)?;

    // A missing header is verified as empty and fails like a bad signature
    let signature = headers
        .get(STRIPE_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let cmd = ReceiveWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    state.webhook_handler().handle(cmd).await?;

    Ok(StatusCode::OK)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook failures to HTTP responses.
///
/// Details are logged server-side only; the response body is always empty.
#[derive(Debug)]
pub enum WebhookApiError {
    /// The request body could not be read.
    BodyUnreadable(BytesRejection),
    /// Signature verification or envelope parsing failed.
    Rejected(WebhookError),
}

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self::Rejected(err)
    }
}

impl WebhookApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BodyUnreadable(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(err) => err.status_code(),
        }
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            Self::BodyUnreadable(rejection) => {
                tracing::warn!(error = %rejection, "Failed to read webhook body");
            }
            Self::Rejected(err) => {
                tracing::warn!(error = %err, "Failed to validate signature");
            }
        }
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::InMemoryLifecycleLog;

    fn test_state() -> (WebhookAppState, Arc<InMemoryLifecycleLog>) {
        let log = Arc::new(InMemoryLifecycleLog::new());
        let state = WebhookAppState::new(
            Arc::new(StripeWebhookVerifier::new("whsec_state_secret")),
            log.clone(),
        );
        (state, log)
    }

    fn signed_headers(state: &WebhookAppState, payload: &[u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let signature = state
            .verifier
            .sign(payload, chrono::Utc::now().timestamp());
        headers.insert(STRIPE_SIGNATURE_HEADER, signature.parse().unwrap());
        headers
    }

    #[tokio::test]
    async fn handler_returns_ok_for_verified_event() {
        let (state, log) = test_state();
        let payload: &[u8] =
            br#"{"type":"customer.source.deleted","data":{"object":{"customer":"cus_456"}}}"#;
        let headers = signed_headers(&state, payload);

        let result =
            handle_stripe_webhook(State(state), headers, Ok(Bytes::from_static(payload))).await;

        assert_eq!(result.unwrap(), StatusCode::OK);
        assert_eq!(log.count(), 1);
    }

    #[tokio::test]
    async fn handler_rejects_missing_header() {
        let (state, log) = test_state();
        let payload: &[u8] = br#"{"type":"customer.source.deleted"}"#;

        let result =
            handle_stripe_webhook(State(state), HeaderMap::new(), Ok(Bytes::from_static(payload)))
                .await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(log.is_empty());
    }

    #[test]
    fn api_error_maps_invalid_signature_to_400() {
        let err = WebhookApiError::from(WebhookError::InvalidSignature);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_expired_timestamp_to_400() {
        let err = WebhookApiError::from(WebhookError::TimestampOutOfRange);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
