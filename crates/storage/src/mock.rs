//! Mock storage service implementation
//!
//! Keeps objects in memory and records every delete so tests can assert
//! that removing a record releases exactly the expected asset.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{StorageError, StorageService};

/// Object captured by the mock service
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Mock storage service for testing
#[derive(Debug, Clone, Default)]
pub struct MockStorageService {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    deleted: Arc<Mutex<Vec<String>>>,
}

impl MockStorageService {
    /// Create a new mock storage service
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys currently stored
    pub fn stored_keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    /// The object stored under `key`, if any
    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// Every key passed to `delete`, in call order (duplicates preserved)
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    /// How many times `delete` was called for `key`
    pub fn delete_count(&self, key: &str) -> usize {
        self.deleted
            .lock()
            .unwrap()
            .iter()
            .filter(|k| k.as_str() == key)
            .count()
    }
}

#[async_trait::async_trait]
impl StorageService for MockStorageService {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey("Key is required".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey("Key is required".to_string()));
        }
        Ok(format!(
            "mock://signed/{}?expires={}",
            key,
            expires_in.as_secs()
        ))
    }

    fn public_url(&self, key: &str) -> String {
        format!("mock://public/{}", key)
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey("Key is required".to_string()));
        }
        self.objects.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }
}
