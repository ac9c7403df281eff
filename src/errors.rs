// errors.rs

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::repositories::RepositoryError;

/// Coarse classification used to pick the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

/// Errors returned by the chat service and the HTTP handlers
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range input; the message is shown to the caller
    #[error("{0}")]
    Validation(String),

    /// The chat does not exist or has been deleted
    #[error("chat not found")]
    NotFound,

    /// Anything the persistence layer reported
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound => ErrorKind::NotFound,
            AppError::Storage(_) => ErrorKind::Internal,
        }
    }
}

/// Generic body for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.kind() {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, self.to_string()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ErrorKind::Internal => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
