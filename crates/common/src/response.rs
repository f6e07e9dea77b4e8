//! The uniform response envelope
//!
//! Every outbound body has the same shape: `{success, status, message, data}`
//! on success, `{success: false, status, message[, errors]}` on failure. The
//! `errors` key is omitted entirely when there are no error details, so the
//! serialized bytes are deterministic for fixed inputs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// Messages shared by every route
pub mod messages {
    pub const OPERATION_SUCCESSFUL: &str = "Operation successful";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
    pub const ROUTE_NOT_FOUND: &str = "Route not found";
    pub const NO_TOKEN_PROVIDED: &str = "No token provided";
    pub const INVALID_TOKEN: &str = "Invalid or expired token";
}

#[derive(Debug, Serialize)]
struct SuccessBody<T: Serialize> {
    success: bool,
    status: u16,
    message: String,
    data: T,
}

#[derive(Debug, Serialize)]
struct FailBody {
    success: bool,
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

/// Send a success envelope.
///
/// `data` is serialized as-is; a `null` payload is represented by
/// `serde_json::Value::Null`, matching the delete-operation contract.
pub fn success<T: Serialize>(data: T, message: impl Into<String>, status: StatusCode) -> Response {
    let message = message.into();
    let body = SuccessBody {
        success: true,
        status: status.as_u16(),
        message,
        data,
    };
    (status, Json(body)).into_response()
}

/// Send a failure envelope.
///
/// Failures are logged before the body is sent. `errors` carries optional
/// structured detail and is dropped from the body when `None` or empty.
pub fn fail(message: impl Into<String>, status: StatusCode, errors: Option<Value>) -> Response {
    let message = message.into();
    let errors = errors.filter(|e| match e {
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
        _ => true,
    });

    tracing::error!(status = status.as_u16(), message = %message, "request failed");

    let body = FailBody {
        success: false,
        status: status.as_u16(),
        message,
        errors,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope_shape() {
        let response = success(json!({"_id": "abc"}), "M", StatusCode::CREATED);
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["status"], json!(201));
        assert_eq!(body["message"], json!("M"));
        assert_eq!(body["data"], json!({"_id": "abc"}));
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn success_with_null_data_keeps_data_key() {
        let response = success(Value::Null, "Deleted", StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.get("data").is_some());
        assert_eq!(body["data"], Value::Null);
    }

    #[tokio::test]
    async fn fail_envelope_omits_empty_errors() {
        let response = fail("Bad input", StatusCode::BAD_REQUEST, None);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["status"], json!(400));
        assert_eq!(body["message"], json!("Bad input"));
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn fail_envelope_drops_empty_object_details() {
        let response = fail("Bad input", StatusCode::BAD_REQUEST, Some(json!({})));
        let body = body_json(response).await;
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn fail_envelope_carries_details() {
        let response = fail(
            "Route not found",
            StatusCode::NOT_FOUND,
            Some(json!({"details": "The requested route '/nope' does not exist"})),
        );
        let body = body_json(response).await;
        assert_eq!(
            body["errors"]["details"],
            json!("The requested route '/nope' does not exist")
        );
    }

    #[tokio::test]
    async fn envelope_is_deterministic_for_fixed_inputs() {
        let a = body_json(success(json!({"n": 1}), "M", StatusCode::OK)).await;
        let b = body_json(success(json!({"n": 1}), "M", StatusCode::OK)).await;
        assert_eq!(a, b);
    }
}
