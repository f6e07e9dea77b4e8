//! Common error types and handling for Stonegate

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::{self, messages};

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Stonegate backend
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Unexpected(_) | Error::Database(_) | Error::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message sent to the client. Server-side failures get a fixed
    /// generic message; the underlying cause stays in the log only.
    fn client_message(&self) -> String {
        match self {
            Error::Authentication(msg)
            | Error::Validation(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg) => msg.clone(),
            Error::Unexpected(_) | Error::Database(_) | Error::Storage(_) => {
                messages::INTERNAL_SERVER_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context; the envelope carries a
        // generic message for them.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal server error");
        }

        response::fail(self.client_message(), status, None)
    }
}
