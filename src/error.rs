//! Error types for Cargo Payments.
//!
//! Validation problems are reported to callers as an `OperationResult`;
//! the errors here cover everything that is not a caller mistake.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StoreScope;

/// Failure raised by a store handle.
#[derive(Debug, Error)]
#[error("{scope} store error: {source}")]
pub struct StorageError {
    /// Store that failed.
    pub scope: StoreScope,
    #[source]
    pub source: sqlx::Error,
}

impl StorageError {
    pub fn new(scope: StoreScope, source: sqlx::Error) -> Self {
        Self { scope, source }
    }
}

/// Result type alias for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Unified error type for the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Storage(e) => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %e, scope = %e.scope, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred",
                )
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for HTTP handlers.
pub type AppResult<T> = Result<T, AppError>;
