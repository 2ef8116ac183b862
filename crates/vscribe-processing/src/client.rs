//! Processing service HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{ProcessDescriptor, ProcessRequest, ProcessedVideo};

/// Configuration for the processing client.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Base URL of the processing service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            // Processing a full video takes minutes, not seconds
            timeout: Duration::from_secs(600),
        }
    }
}

impl ProcessorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PROCESSING_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            timeout: Duration::from_secs(
                std::env::var("PROCESSING_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600),
            ),
        }
    }
}

/// Client for the external video processing service.
pub struct ProcessorClient {
    http: Client,
    config: ProcessorConfig,
}

impl ProcessorClient {
    /// Create a new processing client.
    pub fn new(config: ProcessorConfig) -> ProcessingResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProcessingError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ProcessingResult<Self> {
        Self::new(ProcessorConfig::from_env())
    }

    /// Submit a stored video for processing and wait for its descriptor.
    ///
    /// No retry on failure: a failed call is logged and reported once
    /// through the job tracker by the caller.
    pub async fn process(&self, request: &ProcessRequest) -> ProcessingResult<ProcessedVideo> {
        let url = format!("{}/process_video", self.config.base_url);

        debug!("Sending processing request to {}", url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ProcessingError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProcessingError::RequestFailed(format!(
                "processing service returned {}: {}",
                status, body
            )));
        }

        let descriptor: ProcessDescriptor = response.json().await?;
        descriptor.into_output()
    }
}
