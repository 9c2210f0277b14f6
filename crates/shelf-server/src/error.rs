use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use shelf_query::QueryError;
use shelf_store::StoreError;
use shelf_types::RecordId;

/// Errors surfaced to HTTP clients.
///
/// The full taxonomy: malformed input → 400, missing record → 404. A list
/// query that matches nothing is not an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed list parameters (bad ordering clause).
    #[error("invalid list request: {0}")]
    BadRequest(#[from] QueryError),

    /// The referenced record does not exist.
    #[error("record not found: {0}")]
    NotFound(RecordId),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

/// Errors from running the server itself.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
