//! JSON response envelope shared by every endpoint.
//!
//! Every response carries the same two-field shape:
//!
//! ```json
//! {"data": <payload or null>, "error": null}
//! {"data": null, "error": {"code": 0, "message": "..."}}
//! ```
//!
//! A missing payload is an explicit `"data": null`, not an omitted field, so
//! clients can distinguish "no customer yet" from a malformed response.

use serde::Serialize;
use serde_json::Value;

/// Error half of the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Error code. The storefront reports every validation error as code 0.
    pub code: i32,
    /// Human-readable client message.
    pub message: String,
}

/// Uniform response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T = Value> {
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    /// Successful response with a payload.
    pub const fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Successful response with a null payload.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

impl Envelope {
    /// Failed response carrying an error body and a null payload.
    #[must_use]
    pub fn fail(code: i32, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
            }),
        }
    }
}
