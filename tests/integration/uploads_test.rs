//! Upload endpoint behavior with the mock storage backend

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, test_app, test_token};

const BOUNDARY: &str = "stonegate-test-boundary";

fn multipart_body(field: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_stores_object_and_returns_key_and_url() {
    let harness = test_app();

    let body = multipart_body("images", "site-photo.jpg", "image/jpeg", b"jpegdata");
    let response = harness
        .app
        .oneshot(upload_request(
            "/api/uploads?path=projects/images&type=public",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], json!(true));
    assert_eq!(json["status"], json!(201));

    let key = json["data"]["key"].as_str().unwrap();
    assert!(key.starts_with("public/projects/images/"));
    assert!(key.ends_with("-site-photo.jpg"));
    assert_eq!(
        json["data"]["url"].as_str().unwrap(),
        format!("mock://public/{key}")
    );

    let stored = harness.storage.object(key).expect("object stored");
    assert_eq!(stored.bytes, b"jpegdata");
    assert_eq!(stored.content_type, "image/jpeg");
}

#[tokio::test]
async fn upload_rejects_disallowed_content_type() {
    let harness = test_app();

    let body = multipart_body("images", "script.svg", "image/svg+xml", b"<svg/>");
    let response = harness
        .app
        .oneshot(upload_request("/api/uploads", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(harness.storage.stored_keys().is_empty());
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let harness = test_app();

    let body = multipart_body("attachment", "a.jpg", "image/jpeg", b"data");
    let response = harness
        .app
        .oneshot(upload_request("/api/uploads", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], json!("No file provided"));
}

#[tokio::test]
async fn upload_requires_auth() {
    let harness = test_app();

    let body = multipart_body("images", "a.jpg", "image/jpeg", b"data");
    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/uploads")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(harness.storage.stored_keys().is_empty());
}

#[tokio::test]
async fn signed_url_for_private_object() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .uri("/api/uploads/signed-url?path=private/docs/abc-contract.pdf")
                .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!("mock://signed/private/docs/abc-contract.pdf?expires=3600")
    );
}

#[tokio::test]
async fn signed_url_without_path_is_400() {
    let harness = test_app();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .uri("/api/uploads/signed-url")
                .header(header::AUTHORIZATION, format!("Bearer {}", test_token()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], json!("Invalid path provided"));
}
