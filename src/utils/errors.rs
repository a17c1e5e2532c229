//! Error handling
//!
//! Errors raised by the inventory service and their conversion into HTTP
//! responses. Every response body has the shape `{ "message": ... }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The store was unreachable or the query failed.
    #[error("{0}")]
    DataAccess(#[from] sqlx::Error),

    /// A filter value could not be interpreted.
    #[error("{0}")]
    InvalidFilter(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

/// API error body
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataAccess(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidFilter(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::DataAccess(e) => tracing::error!("Data access error: {}", e),
            AppError::InvalidFilter(msg) => tracing::warn!("Invalid filter: {}", msg),
            AppError::NotFound(msg) => tracing::debug!("Not found: {}", msg),
            AppError::BadRequest(msg) => tracing::warn!("Bad request: {}", msg),
        }

        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result alias for service operations
pub type AppResult<T> = Result<T, AppError>;

/// Lookup miss for a resource identified by `id`
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}
