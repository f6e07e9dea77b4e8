//! S3-compatible storage service implementation
//!
//! Talks to AWS S3, DigitalOcean Spaces, or LocalStack depending on the
//! configured endpoint and credentials.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::SharedCredentialsProvider;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client as S3Client;

use crate::{StorageConfig, StorageError, StorageService};

/// S3-compatible storage service implementation
pub struct S3StorageService {
    client: S3Client,
    config: StorageConfig,
}

impl S3StorageService {
    /// Create a new S3 storage service
    pub async fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

        if let Some(endpoint_url) = config.endpoint_url.as_ref() {
            tracing::info!("Using custom storage endpoint: {}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url);
        }

        if let (Some(access_key), Some(secret_key)) =
            (config.access_key.as_ref(), config.secret_key.as_ref())
        {
            let credentials =
                Credentials::new(access_key, secret_key, None, None, "stonegate-storage");
            loader = loader.credentials_provider(SharedCredentialsProvider::new(credentials));
        }

        let aws_config = loader.load().await;

        // Spaces and LocalStack want path-style addressing off/on differently;
        // virtual-hosted style works for both when the endpoint carries the
        // bucket, so only force path style for localhost endpoints.
        let force_path_style = config
            .endpoint_url
            .as_deref()
            .map(|u| u.contains("localhost") || u.contains("127.0.0.1"))
            .unwrap_or(false);

        let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(force_path_style)
            .build();

        Ok(Self {
            client: S3Client::from_conf(s3_config),
            config,
        })
    }

    fn require_key(key: &str) -> Result<(), StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey("Key is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StorageService for S3StorageService {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        Self::require_key(key)?;

        let mut put = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes));

        if key.starts_with("public/") {
            put = put.acl(ObjectCannedAcl::PublicRead);
        }

        put.send()
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to upload object: {}", e)))?;

        tracing::info!(key = %key, "object uploaded");
        Ok(())
    }

    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        Self::require_key(key)?;

        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::Backend(format!("Invalid expiry: {}", e)))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.config.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to sign URL: {}", e)))?;

        Ok(presigned.uri().to_string())
    }

    fn public_url(&self, key: &str) -> String {
        match self.config.public_base_url.as_deref() {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.config.bucket, self.config.region, key
            ),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        Self::require_key(key)?;

        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("Failed to delete object: {}", e)))?;

        tracing::info!(key = %key, "object deleted");
        Ok(())
    }
}
