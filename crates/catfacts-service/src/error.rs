//! API error types and responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use catfacts_core::FactError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - missing or invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The fact source failed.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The fact source answered without the expected data.
    #[error("malformed upstream response: {0}")]
    MalformedUpstream(String),

    /// Translation failed.
    #[error("translation error: {0}")]
    Translation(String),

    /// Internal server error (storage).
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.as_str()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.as_str()),
            Self::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "upstream_error",
                msg.as_str(),
            ),
            Self::MalformedUpstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "malformed_upstream_response",
                msg.as_str(),
            ),
            Self::Translation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "translation_error",
                msg.as_str(),
            ),
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.as_str(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: message.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<FactError> for ApiError {
    fn from(err: FactError) -> Self {
        match err {
            FactError::Validation(msg) => Self::BadRequest(msg),
            FactError::NotFound(_) => Self::NotFound(err.to_string()),
            FactError::Upstream(msg) => Self::Upstream(msg),
            FactError::MalformedUpstreamResponse(msg) => Self::MalformedUpstream(msg),
            FactError::Translation(msg) => Self::Translation(msg),
            FactError::Store(msg) => Self::Internal(msg),
        }
    }
}

// Extractor failures (bad JSON, wrong content type, unparsable id or query) are
// client errors and use the same JSON body as every other error.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
