use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Errors a handler can report to the caller.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required input is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The referenced row does not exist
    #[error("{0}")]
    NotFound(String),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::Validation(message) | ApiError::NotFound(message) => message,
            ApiError::Database(db_error) => {
                error!("Database error while handling request: {}", db_error);
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = std::result::Result<T, ApiError>;
