//! S3-backed [`ObjectStorage`].
//!
//! Works against AWS S3 or any S3-compatible store. Credentials and region
//! come from the standard AWS SDK chain; a custom endpoint switches the
//! client to path-style addressing.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use junrei_core::storage::{ObjectStorage, StorageError};

/// Object storage backed by an S3 client.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    /// Build a client from the ambient AWS configuration.
    ///
    /// `endpoint` overrides the service URL, e.g. for MinIO or a Supabase
    /// storage S3 gateway.
    pub async fn connect(endpoint: Option<&str>) -> Self {
        let shared = aws_config::load_from_env().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            tracing::info!(endpoint, "Using custom S3 endpoint");
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        Self {
            client: Client::from_conf(builder.build()),
        }
    }

    fn presigning(bucket: &str, path: &str, expires_in: Duration) -> Result<PresigningConfig, StorageError> {
        PresigningConfig::expires_in(expires_in).map_err(|e| StorageError::Sign {
            bucket: bucket.to_string(),
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn signed_upload_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let config = Self::presigning(bucket, path, expires_in)?;
        let request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(path)
            .presigned(config)
            .await
            .map_err(|e| StorageError::Sign {
                bucket: bucket.to_string(),
                path: path.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(request.uri().to_string())
    }

    async fn signed_download_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let config = Self::presigning(bucket, path, expires_in)?;
        let request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(path)
            .presigned(config)
            .await
            .map_err(|e| StorageError::Sign {
                bucket: bucket.to_string(),
                path: path.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(request.uri().to_string())
    }

    async fn put_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(path)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                bucket: bucket.to_string(),
                path: path.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}
