//! HTTP error responses
//!
//! Every failure is rendered as `{"error": "<message>"}` with a matching status.

use crate::error::NoteError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 for ids that cannot exist (e.g. non-numeric path segments)
    pub fn note_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Note not found")
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        let status = match &err {
            NoteError::InvalidInput => StatusCode::BAD_REQUEST,
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => {
                warn!("Unexpected error in request handler: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
