//! Stonegate object storage
//!
//! Provides asset storage behind an S3-compatible bucket (AWS S3,
//! DigitalOcean Spaces, LocalStack) with support for:
//! - uploads keyed under `{visibility}/{path}/{uuid}-{filename}`
//! - public URL construction and time-limited signed GET URLs
//! - delete-by-key when the owning record is removed
//! - an in-memory mock for testing

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

pub mod mock;
pub mod s3;

/// Default expiry for signed GET URLs: one hour
pub const DEFAULT_SIGNED_URL_TTL: Duration = Duration::from_secs(3600);

/// Upload path for project images
pub const PROJECT_IMAGE_PATH: &str = "projects/images";

/// Upload path for team member images
pub const TEAM_IMAGE_PATH: &str = "teams/images";

/// Content types accepted for image uploads
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Whether an object is publicly readable or requires a signed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn folder(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// Build an object key for a new upload: `{folder}/{path}/{uuid}-{filename}`.
pub fn object_key(visibility: Visibility, path: &str, filename: &str) -> String {
    let path = path.trim_matches('/');
    let path = if path.is_empty() { "uploads" } else { path };
    format!(
        "{}/{}/{}-{}",
        visibility.folder(),
        path,
        Uuid::new_v4(),
        filename
    )
}

/// Storage service configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider (s3, mock)
    pub provider: String,
    /// Bucket (or Space) name
    pub bucket: String,
    /// Region
    pub region: String,
    /// Endpoint override for S3-compatible providers and LocalStack
    pub endpoint_url: Option<String>,
    /// Explicit credentials; falls back to the default AWS chain when absent
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    /// Base URL for public objects; derived from bucket/region when absent
    pub public_base_url: Option<String>,
}

impl StorageConfig {
    /// Create storage config from environment variables
    pub fn from_env() -> Result<Self, StorageError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "s3".to_string());
        let bucket = std::env::var("STORAGE_BUCKET")
            .map_err(|_| StorageError::Configuration("STORAGE_BUCKET is required".to_string()))?;
        let region = std::env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        Ok(Self {
            provider,
            bucket,
            region,
            endpoint_url: std::env::var("STORAGE_ENDPOINT_URL").ok(),
            access_key: std::env::var("STORAGE_ACCESS_KEY").ok(),
            secret_key: std::env::var("STORAGE_SECRET_KEY").ok(),
            public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL").ok(),
        })
    }
}

/// Storage service trait for different implementations
#[async_trait::async_trait]
pub trait StorageService: Send + Sync {
    /// Store an object under `key`. Keys beginning with `public/` are
    /// uploaded world-readable.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Issue a time-limited signed GET URL for a private object
    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String, StorageError>;

    /// Deterministic URL for a public object
    fn public_url(&self, key: &str) -> String;

    /// Delete the object stored under `key`. Deleting an absent key is not
    /// an error (the bucket semantics of S3 DeleteObject).
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage service factory
pub struct StorageServiceFactory;

impl StorageServiceFactory {
    /// Create storage service based on configuration
    pub async fn create(
        config: StorageConfig,
    ) -> Result<std::sync::Arc<dyn StorageService>, StorageError> {
        match config.provider.as_str() {
            "s3" | "spaces" => {
                tracing::info!(bucket = %config.bucket, "Creating S3 storage service");
                let service = s3::S3StorageService::new(config).await?;
                Ok(std::sync::Arc::new(service))
            }
            "mock" => {
                tracing::info!("Creating mock storage service");
                Ok(std::sync::Arc::new(mock::MockStorageService::new()))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: s3, mock",
                provider
            ))),
        }
    }
}
