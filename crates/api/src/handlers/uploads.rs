//! Upload API handlers
//!
//! - POST /api/uploads - Proxy a multipart image upload into the bucket (auth)
//! - GET /api/uploads/signed-url - Issue a URL for an existing object (auth)
//!
//! Uploaded objects are keyed `{visibility}/{path}/{uuid}-{filename}`;
//! resource mutations then reference the returned key.

use std::sync::Arc;

use axum::{
    extract::{multipart::Multipart, FromRef, Query, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use stonegate_auth::{AuthConfig, AuthUser};
use stonegate_common::{response, Error, Result};
use stonegate_storage::{
    object_key, StorageService, Visibility, ALLOWED_IMAGE_TYPES, DEFAULT_SIGNED_URL_TTL,
};

pub const FILE_UPLOADED: &str = "File uploaded successfully";
pub const SIGNED_URL_GENERATED: &str = "Signed URL generated successfully";
pub const INVALID_PATH: &str = "Invalid path provided";
pub const NO_FILE_PROVIDED: &str = "No file provided";

/// The multipart field that carries image uploads
const IMAGES_FIELD: &str = "images";

/// Application state for the upload endpoints
#[derive(Clone)]
pub struct UploadsState {
    pub storage: Arc<dyn StorageService>,
    pub auth: AuthConfig,
}

impl FromRef<UploadsState> for AuthConfig {
    fn from_ref(state: &UploadsState) -> Self {
        state.auth.clone()
    }
}

/// Create the upload routes (mounted under `/api/uploads`)
pub fn routes() -> Router<UploadsState> {
    Router::new()
        .route("/", post(upload_file))
        .route("/signed-url", get(get_signed_url))
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Key prefix under the visibility folder, e.g. `projects/images`
    pub path: Option<String>,
    /// `public` (default) or `private`
    #[serde(rename = "type")]
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignedUrlQuery {
    /// Full object key, e.g. `private/docs/abc-contract.pdf`
    pub path: Option<String>,
    /// `public` or `private` (default)
    #[serde(rename = "type")]
    pub visibility: Option<String>,
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    key: String,
    url: String,
}

fn parse_visibility(raw: Option<&str>, default: Visibility) -> Visibility {
    match raw {
        Some("public") => Visibility::Public,
        Some("private") => Visibility::Private,
        _ => default,
    }
}

/// POST /api/uploads - Proxy a multipart image upload into the bucket (auth)
pub async fn upload_file(
    AuthUser(_claims): AuthUser,
    State(state): State<UploadsState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Response> {
    let visibility = parse_visibility(query.visibility.as_deref(), Visibility::Public);
    let path = query.path.unwrap_or_default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(e.body_text()))?
    {
        if field.name() != Some(IMAGES_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(Error::Validation(format!(
                "Invalid file type. Only {} are allowed",
                ALLOWED_IMAGE_TYPES.join(", ")
            )));
        }

        let filename = field
            .file_name()
            .map(sanitize_filename)
            .unwrap_or_else(|| "upload".to_string());

        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;

        let key = object_key(visibility, &path, &filename);
        state
            .storage
            .upload(&key, bytes.to_vec(), &content_type)
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;

        let url = match visibility {
            Visibility::Public => state.storage.public_url(&key),
            Visibility::Private => state
                .storage
                .signed_url(&key, DEFAULT_SIGNED_URL_TTL)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?,
        };

        return Ok(response::success(
            UploadResponse { key, url },
            FILE_UPLOADED,
            StatusCode::CREATED,
        ));
    }

    Err(Error::Validation(NO_FILE_PROVIDED.to_string()))
}

/// GET /api/uploads/signed-url - Issue a URL for an existing object (auth)
pub async fn get_signed_url(
    AuthUser(_claims): AuthUser,
    State(state): State<UploadsState>,
    Query(query): Query<SignedUrlQuery>,
) -> Result<Response> {
    let key = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::Validation(INVALID_PATH.to_string()))?;

    let visibility = parse_visibility(query.visibility.as_deref(), Visibility::Private);
    let url = match visibility {
        Visibility::Public => state.storage.public_url(&key),
        Visibility::Private => state
            .storage
            .signed_url(&key, DEFAULT_SIGNED_URL_TTL)
            .await
            .map_err(|e| Error::Storage(e.to_string()))?,
    };

    Ok(response::success(url, SIGNED_URL_GENERATED, StatusCode::OK))
}

/// Keep only the final path component of a client-supplied filename
fn sanitize_filename(raw: &str) -> String {
    raw.rsplit(['/', '\\'])
        .next()
        .unwrap_or("upload")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_visibility() {
        assert_eq!(
            parse_visibility(Some("public"), Visibility::Private),
            Visibility::Public
        );
        assert_eq!(
            parse_visibility(Some("private"), Visibility::Public),
            Visibility::Private
        );
        assert_eq!(
            parse_visibility(Some("other"), Visibility::Public),
            Visibility::Public
        );
        assert_eq!(parse_visibility(None, Visibility::Private), Visibility::Private);
    }

    #[test]
    fn test_sanitize_filename_strips_directories() {
        assert_eq!(sanitize_filename("photo.jpg"), "photo.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\shot.png"), "shot.png");
    }
}
