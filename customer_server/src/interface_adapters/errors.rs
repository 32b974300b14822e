// Error translation boundary: the one place where failures that escape the
// handlers are turned into HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::errors::CustomerError;
use crate::interface_adapters::protocol::ErrorResponse;

pub const JSON_ERROR: &str = "JsonError";
pub const INVALID_JSON_FALLBACK: &str = "invalid json";
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const CUSTOMER_NOT_FOUND_FALLBACK: &str = "customer not found";

/// Failure kinds a handler can hand back to the boundary.
///
/// Only `MalformedJson` and `CustomerNotFound` are mapped to a JSON
/// [`ErrorResponse`]. The other variants fall through to the framework's
/// default response for that failure.
#[derive(Debug)]
pub enum ApiFailure {
    MalformedJson { message: Option<String> },
    CustomerNotFound { message: Option<String> },
    // Body rejections other than a syntax error (content type, field types).
    Rejected(JsonRejection),
    Internal(String),
}

/// Maps a failure to its status and body, or `None` for unmapped kinds.
///
/// Pure: the same failure always yields the same response.
pub fn translate(failure: &ApiFailure) -> Option<(StatusCode, ErrorResponse)> {
    match failure {
        ApiFailure::MalformedJson { message } => Some((
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(JSON_ERROR, message_or(message, INVALID_JSON_FALLBACK)),
        )),
        ApiFailure::CustomerNotFound { message } => Some((
            StatusCode::NOT_FOUND,
            ErrorResponse::new(
                CUSTOMER_NOT_FOUND,
                message_or(message, CUSTOMER_NOT_FOUND_FALLBACK),
            ),
        )),
        ApiFailure::Rejected(_) | ApiFailure::Internal(_) => None,
    }
}

// Empty messages count as absent.
fn message_or<'a>(message: &'a Option<String>, fallback: &'a str) -> &'a str {
    message
        .as_deref()
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback)
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match translate(&self) {
            Some((status, body)) => (status, Json(body)).into_response(),
            None => fall_through(self),
        }
    }
}

fn fall_through(failure: ApiFailure) -> Response {
    match failure {
        ApiFailure::Rejected(rejection) => rejection.into_response(),
        other => {
            tracing::error!(failure = ?other, "unmapped failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(err) => ApiFailure::MalformedJson {
                message: Some(err.body_text()),
            },
            other => ApiFailure::Rejected(other),
        }
    }
}

impl From<CustomerError> for ApiFailure {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(_) => ApiFailure::CustomerNotFound {
                message: Some(err.to_string()),
            },
            CustomerError::StorageFailure => ApiFailure::Internal(err.to_string()),
        }
    }
}
