//! Object storage seam.
//!
//! Handlers only need three things from the blob store: presigned upload
//! URLs, presigned download URLs, and a direct upload for server-rendered
//! files. The S3 implementation lives in `junrei-storage`; tests substitute
//! an in-memory double.

use std::time::Duration;

use async_trait::async_trait;

/// Failure talking to object storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to sign URL for {bucket}/{path}: {message}")]
    Sign {
        bucket: String,
        path: String,
        message: String,
    },

    #[error("Failed to upload {bucket}/{path}: {message}")]
    Upload {
        bucket: String,
        path: String,
        message: String,
    },
}

/// Minimal blob store interface used by the API.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// A URL the client can `PUT` the object's bytes to, valid for `expires_in`.
    async fn signed_upload_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError>;

    /// A URL the client can `GET` the object from, valid for `expires_in`.
    async fn signed_download_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError>;

    /// Store `bytes` at `bucket/path`, replacing any existing object.
    async fn put_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}
