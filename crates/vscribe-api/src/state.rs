//! Application state.

use std::sync::Arc;

use vscribe_processing::ProcessorClient;
use vscribe_storage::BucketClient;

use crate::config::ApiConfig;
use crate::tracker::{JobTracker, SignedUrlCache};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub storage: Arc<BucketClient>,
    pub processor: Arc<ProcessorClient>,
    pub jobs: JobTracker,
    pub signed_urls: SignedUrlCache,
}

impl AppState {
    /// Create application state from already-built clients.
    pub fn new(config: ApiConfig, storage: BucketClient, processor: ProcessorClient) -> Self {
        Self {
            config,
            storage: Arc::new(storage),
            processor: Arc::new(processor),
            jobs: JobTracker::new(),
            signed_urls: SignedUrlCache::new(),
        }
    }

    /// Create application state with clients built from the environment.
    pub async fn from_env(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let storage = BucketClient::from_env().await?;
        let processor = ProcessorClient::from_env()?;
        Ok(Self::new(config, storage, processor))
    }
}
