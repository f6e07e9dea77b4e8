//! Envelope, routing, and access-gate behavior over the composed app
//!
//! None of these requests reach the database: the gate and validation
//! layers short-circuit first, and the fallback is router-level.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, test_app, test_token};

#[tokio::test]
async fn health_check_responds() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmatched_route_gets_404_envelope_with_details() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["message"], json!("Route not found"));
    assert_eq!(
        body["errors"]["details"],
        json!("The requested route '/api/nonexistent' does not exist")
    );
}

#[tokio::test]
async fn mutation_without_token_is_rejected_before_any_collaborator_runs() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/project")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"title": "A", "description": "B", "image": "k1"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("No token provided"));

    // The handler never ran: nothing touched storage or mail.
    assert!(harness.storage.deleted_keys().is_empty());
    assert!(harness.storage.stored_keys().is_empty());
    assert_eq!(harness.email.sent_count(), 0);
}

#[tokio::test]
async fn mutation_with_garbage_token_is_rejected() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/team/7b4175f0-8a14-4f8e-9a9e-1af7d1c9d3b2")
                .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Invalid or expired token"));
    assert!(harness.storage.deleted_keys().is_empty());
}

#[tokio::test]
async fn authenticated_create_with_missing_fields_is_400() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/project")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
                .body(Body::from(json!({"title": "A"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Missing required fields"));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn empty_strings_count_as_missing_fields() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/project")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
                .body(Body::from(
                    json!({"title": "A", "description": "", "image": "k1"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_submission_with_invalid_email_is_400() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "firstName": "Jordan",
                        "lastName": "Lee",
                        "emailAddress": "not-an-email",
                        "message": "Hello"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.email.sent_count(), 0);
}

#[tokio::test]
async fn contact_listing_requires_auth() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
