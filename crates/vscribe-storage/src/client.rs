//! Bucket client implementation.

use std::path::Path;
use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{StorageError, StorageResult};

/// HMAC interop key pair, parsed from the credentials JSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct HmacCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Configuration for the bucket client.
#[derive(Debug, Clone)]
pub struct BucketConfig {
    /// S3-compatible API endpoint
    pub endpoint_url: String,
    /// Bucket name
    pub bucket_name: String,
    /// Region ("auto" for interop endpoints)
    pub region: String,
    /// Explicit HMAC credentials; `None` falls back to the ambient chain
    pub credentials: Option<HmacCredentials>,
}

impl BucketConfig {
    /// Create config from environment variables.
    ///
    /// `STORAGE_CREDENTIALS_JSON`, when set, must hold a JSON document
    /// with the HMAC key pair; a document that does not parse is fatal.
    pub fn from_env() -> StorageResult<Self> {
        let credentials = match std::env::var("STORAGE_CREDENTIALS_JSON") {
            Ok(json) => Some(serde_json::from_str(&json).map_err(|e| {
                StorageError::config_error(format!("STORAGE_CREDENTIALS_JSON is not valid: {}", e))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            endpoint_url: std::env::var("STORAGE_ENDPOINT_URL")
                .unwrap_or_else(|_| "https://storage.googleapis.com".to_string()),
            bucket_name: std::env::var("STORAGE_BUCKET")
                .map_err(|_| StorageError::config_error("STORAGE_BUCKET not set"))?,
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "auto".to_string()),
            credentials,
        })
    }
}

/// Object storage client over the bucket's S3-compatible API.
#[derive(Clone)]
pub struct BucketClient {
    client: Client,
    endpoint_url: String,
    bucket: String,
}

impl BucketClient {
    /// Create a new bucket client from configuration.
    pub async fn new(config: BucketConfig) -> StorageResult<Self> {
        let client = match &config.credentials {
            Some(creds) => {
                let credentials = Credentials::new(
                    &creds.access_key_id,
                    &creds.secret_access_key,
                    None,
                    None,
                    "interop",
                );

                let sdk_config = Builder::new()
                    .behavior_version(BehaviorVersion::latest())
                    .endpoint_url(&config.endpoint_url)
                    .region(Region::new(config.region.clone()))
                    .credentials_provider(credentials)
                    .force_path_style(true)
                    .build();

                Client::from_conf(sdk_config)
            }
            None => {
                warn!("No storage credentials configured, using ambient credential chain");
                let shared = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(config.region.clone()))
                    .load()
                    .await;
                let sdk_config = Builder::from(&shared)
                    .endpoint_url(&config.endpoint_url)
                    .force_path_style(true)
                    .build();
                Client::from_conf(sdk_config)
            }
        };

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.trim_end_matches('/').to_string(),
            bucket: config.bucket_name,
        })
    }

    /// Create from environment variables.
    pub async fn from_env() -> StorageResult<Self> {
        let config = BucketConfig::from_env()?;
        Self::new(config).await
    }

    /// Public (unsigned) URL of an object, for the upload response.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint_url, self.bucket, key)
    }

    /// Upload a local file to the bucket.
    ///
    /// The object is verified to exist after the put; an absent object
    /// post-upload is an upload failure. No retry is attempted.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        key: &str,
        content_type: &str,
    ) -> StorageResult<String> {
        let path = path.as_ref();
        debug!("Uploading {} to {}", path.display(), key);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        if !self.exists(key).await? {
            return Err(StorageError::upload_failed(format!(
                "object {} missing after upload",
                key
            )));
        }

        info!("Uploaded {} to {}", path.display(), key);
        Ok(key.to_string())
    }

    /// Download object as bytes.
    pub async fn download_bytes(&self, key: &str) -> StorageResult<Vec<u8>> {
        debug!("Downloading {}", key);

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.to_string().contains("NoSuchKey") {
                    StorageError::not_found(key)
                } else {
                    StorageError::DownloadFailed(e.to_string())
                }
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(bytes)
    }

    /// Download an object to a local file.
    ///
    /// The blob name is percent-decoded before lookup since callers may
    /// pass URL-encoded names. A zero-byte result is a download failure.
    pub async fn download_file(&self, key: &str, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        let decoded = urlencoding::decode(key)
            .map_err(|e| StorageError::invalid_argument(format!("blob name {}: {}", key, e)))?;
        debug!("Downloading {} to {}", decoded, path.display());

        let bytes = self.download_bytes(&decoded).await?;
        if bytes.is_empty() {
            return Err(StorageError::download_failed(format!(
                "downloaded object {} is empty",
                decoded
            )));
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::download_failed(format!("Failed to create directory: {}", e))
            })?;
        }

        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| StorageError::download_failed(format!("Failed to write file: {}", e)))?;

        info!("Downloaded {} to {}", decoded, path.display());
        Ok(())
    }

    /// Download several objects sequentially.
    ///
    /// The two lists must pair up one-to-one; a length mismatch fails
    /// before any download is attempted, and the first failed download
    /// aborts the remainder.
    pub async fn download_many(
        &self,
        keys: &[String],
        paths: &[std::path::PathBuf],
    ) -> StorageResult<()> {
        if keys.len() != paths.len() {
            return Err(StorageError::invalid_argument(format!(
                "blob and destination lists must have the same length ({} vs {})",
                keys.len(),
                paths.len()
            )));
        }

        for (key, path) in keys.iter().zip(paths) {
            self.download_file(key, path).await?;
        }

        Ok(())
    }

    /// Generate a presigned read-only URL for an object.
    pub async fn presign_get(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        let presign_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::PresignFailed(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presign_config)
            .await
            .map_err(|e| StorageError::PresignFailed(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }

    /// Check if an object exists.
    pub async fn exists(&self, key: &str) -> StorageResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                if e.to_string().contains("NotFound") || e.to_string().contains("NoSuchKey") {
                    Ok(false)
                } else {
                    Err(StorageError::Sdk(e.to_string()))
                }
            }
        }
    }
}
