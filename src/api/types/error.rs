//! API error responses
//!
//! Validation failures render as `{"field": ["message"]}`, everything else
//! as `{"detail": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::domain::{DomainError, FieldErrors};

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    /// Field name to messages
    Fields(FieldErrors),
    /// Single detail message
    Detail { detail: String },
    /// Request could not be parsed
    Details { detail: Vec<String> },
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ApiErrorBody) -> Self {
        Self { status, body }
    }

    /// Field validation failure
    pub fn validation(errors: FieldErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorBody::Fields(errors))
    }

    /// Malformed request (body, query string or path)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorBody::Details {
                detail: vec![message.into()],
            },
        )
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ApiErrorBody::Detail {
                detail: message.into(),
            },
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorBody::Detail {
                detail: message.into(),
            },
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { errors } => Self::validation(errors),
            DomainError::Configuration { ref message } | DomainError::Storage { ref message } => {
                error!(error = %err, "Request failed");
                Self::internal(message.clone())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ApiErrorBody::Fields(errors) => write!(f, "{}: {}", self.status, errors),
            ApiErrorBody::Detail { detail } => write!(f, "{}: {}", self.status, detail),
            ApiErrorBody::Details { detail } => {
                write!(f, "{}: {}", self.status, detail.join(", "))
            }
        }
    }
}

impl std::error::Error for ApiError {}
