//! HTTP error envelope.
//!
//! Every failed request renders as `{"error": {"message": ..., "status": ...}}`.
//! Domain conditions map to 404/409; storage internals are logged and
//! replaced with a generic 500 message so engine error text never reaches
//! clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::db::DbError;

/// An API error carrying the response status and client-facing message.
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

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => Self::not_found(err.to_string()),
            DbError::AlreadyExists { .. } => Self::conflict(err.to_string()),
            DbError::OrphanedReference { .. } => {
                error!(error = %err, "referential integrity violation");
                Self::internal(err.to_string())
            }
            DbError::Database { .. } | DbError::Migration { .. } | DbError::Connection { .. } => {
                error!(error = %err, "storage error");
                Self::internal("internal server error")
            }
        }
    }
}
