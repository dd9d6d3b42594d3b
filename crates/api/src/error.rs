//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::Envelope;
use crate::services::ServiceError;

/// Request-shape failures with the storefront's fixed client messages.
///
/// Every validation failure is reported with error code 0; the platform never
/// used a per-error code taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `contact` missing or not an object.
    #[error("Missing contact data or unexpected format.")]
    ContactShape,

    /// An address field that is present but not an object.
    #[error("Unexpected address format.")]
    AddressShape,

    /// `typeId` missing or not a known address type code.
    #[error("Unknown address type.")]
    AddressType,
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed shape validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A domain service rejected the operation.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// The session layer is not installed.
    #[error("session layer not installed")]
    SessionLayer,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::SessionLayer | Self::Service(ServiceError::Session(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Session(_)) | Self::SessionLayer => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Validation(err) => err.to_string(),
            Self::Service(ServiceError::NotFound(what)) => format!("{what} not found"),
            Self::Service(ServiceError::Session(_)) | Self::SessionLayer => {
                "Internal server error".to_string()
            }
        };

        (status, Json(Envelope::fail(0, message))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
