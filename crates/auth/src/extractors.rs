//! Axum extractor for the bearer-token access gate
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::verify_token;

/// Authenticated request extractor.
///
/// Presence of this extractor in a handler signature makes the route
/// auth-required: a request without a valid bearer token is rejected with
/// a 401 envelope before the handler body runs. On success the decoded
/// claims are attached; there is no database access and no side effect.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredential)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = verify_token(&token, &config)?;

        Ok(AuthUser(claims))
    }
}

/// Extract the bearer token from an Authorization header.
///
/// An exact `Bearer ` prefix is required. A present-but-empty token is a
/// missing credential; a header in any other shape cannot be verified.
fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidCredential)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if token.trim().is_empty() => Err(AuthError::MissingCredential),
        Some(token) => Ok(token.to_string()),
        None => Err(AuthError::InvalidCredential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::issue_token;
    use axum::{body::Body, http::Request, routing::get, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[test]
    fn test_extract_bearer_token() {
        // Valid bearer token
        let header = HeaderValue::from_static("Bearer abc123");
        let result = extract_bearer_token(&header);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "abc123");

        // No Bearer prefix
        let header = HeaderValue::from_static("abc123");
        assert!(matches!(
            extract_bearer_token(&header),
            Err(AuthError::InvalidCredential)
        ));

        // Basic auth (wrong type)
        let header = HeaderValue::from_static("Basic abc123");
        assert!(matches!(
            extract_bearer_token(&header),
            Err(AuthError::InvalidCredential)
        ));

        // Bearer with empty token
        let header = HeaderValue::from_static("Bearer ");
        assert!(matches!(
            extract_bearer_token(&header),
            Err(AuthError::MissingCredential)
        ));
    }

    #[derive(Clone)]
    struct GateState {
        auth: AuthConfig,
        hits: Arc<AtomicUsize>,
    }

    impl FromRef<GateState> for AuthConfig {
        fn from_ref(state: &GateState) -> Self {
            state.auth.clone()
        }
    }

    fn gate_app(state: GateState) -> Router {
        async fn protected(
            AuthUser(claims): AuthUser,
            axum::extract::State(state): axum::extract::State<GateState>,
        ) -> String {
            state.hits.fetch_add(1, Ordering::SeqCst);
            claims.email
        }

        Router::new()
            .route("/protected", get(protected))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_gate_rejects_missing_header_without_invoking_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gate_app(GateState {
            auth: AuthConfig::new("secret", 3600),
            hits: hits.clone(),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], serde_json::json!("No token provided"));
    }

    #[tokio::test]
    async fn test_gate_rejects_bad_token_without_invoking_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gate_app(GateState {
            auth: AuthConfig::new("secret", 3600),
            hits: hits.clone(),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header(AUTHORIZATION, "Bearer bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gate_passes_valid_token_through() {
        let auth = AuthConfig::new("secret", 3600);
        let token = issue_token(Uuid::new_v4(), "admin@example.com", None, &auth).unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let app = gate_app(GateState {
            auth,
            hits: hits.clone(),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header(AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
