//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stonegate_common::response::{self, messages};

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header, or a bearer token that is empty
    #[error("no credential provided")]
    MissingCredential,

    /// A credential was presented but failed verification: bad signature,
    /// malformed payload, expired token, or a header that is not a
    /// well-formed `Bearer` value
    #[error("invalid credential")]
    InvalidCredential,

    /// Token creation failed; only reachable on serialization problems
    #[error("token issuance failed")]
    Issuance,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingCredential => {
                (StatusCode::UNAUTHORIZED, messages::NO_TOKEN_PROVIDED)
            }
            AuthError::InvalidCredential => (StatusCode::UNAUTHORIZED, messages::INVALID_TOKEN),
            AuthError::Issuance => (
                StatusCode::INTERNAL_SERVER_ERROR,
                messages::INTERNAL_SERVER_ERROR,
            ),
        };

        response::fail(message, status, None)
    }
}

impl From<AuthError> for stonegate_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential => {
                stonegate_common::Error::Authentication(messages::NO_TOKEN_PROVIDED.to_string())
            }
            AuthError::InvalidCredential => {
                stonegate_common::Error::Authentication(messages::INVALID_TOKEN.to_string())
            }
            AuthError::Issuance => stonegate_common::Error::Unexpected(anyhow::anyhow!(
                "token issuance failed"
            )),
        }
    }
}
