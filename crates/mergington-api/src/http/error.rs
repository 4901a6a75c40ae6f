//! Application error type mapping to HTTP status codes and `{"detail"}` bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use mergington_types::error::ActivityError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Roster operation errors.
    Activity(ActivityError),
    /// Malformed request (e.g. missing `email` query parameter).
    Validation(String),
}

impl From<ActivityError> for AppError {
    fn from(e: ActivityError) -> Self {
        AppError::Activity(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Activity(ActivityError::NotFound)
            | AppError::Activity(ActivityError::ParticipantNotFound) => StatusCode::NOT_FOUND,
            AppError::Activity(ActivityError::AlreadySignedUp)
            | AppError::Activity(ActivityError::Full) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Activity(e) => e.to_string(),
            AppError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, detail = %self.detail(), "request rejected");
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
