//! In-memory job tracker and signed-URL cache.
//!
//! Both maps live for the lifetime of the process and are lost on
//! restart; they are not shared across instances. Each key is owned by
//! exactly one in-flight job, so last-write-wins per key is the only
//! ordering guarantee needed. Two uploads with colliding filenames
//! share a key and the second overwrites the first (documented race,
//! kept from the original design).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use vscribe_models::JobStatus;

/// Tracks the processing status of each expected output video.
#[derive(Clone, Default)]
pub struct JobTracker {
    inner: Arc<RwLock<HashMap<String, JobStatus>>>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the status for an output name, overwriting any prior value.
    pub async fn set(&self, output_name: &str, status: JobStatus) {
        let mut jobs = self.inner.write().await;
        jobs.insert(output_name.to_string(), status);
    }

    /// Current status for an output name, if the tracker has seen it.
    pub async fn get(&self, output_name: &str) -> Option<JobStatus> {
        let jobs = self.inner.read().await;
        jobs.get(output_name).copied()
    }
}

/// Caches signed download URLs for processed videos.
///
/// Entries are written once on the success path and never refreshed;
/// an entry older than the URL's TTL is served verbatim and the storage
/// provider rejects the expired signature.
#[derive(Clone, Default)]
pub struct SignedUrlCache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SignedUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the signed URL for a processed blob name.
    pub async fn insert(&self, blob_name: &str, url: &str) {
        let mut urls = self.inner.write().await;
        urls.insert(blob_name.to_string(), url.to_string());
    }

    /// Signed URL for a processed blob name, if one was cached.
    pub async fn get(&self, blob_name: &str) -> Option<String> {
        let urls = self.inner.read().await;
        urls.get(blob_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tracker_transitions() {
        let tracker = JobTracker::new();

        assert_eq!(tracker.get("clip_output.mp4").await, None);

        tracker.set("clip_output.mp4", JobStatus::Processing).await;
        assert_eq!(
            tracker.get("clip_output.mp4").await,
            Some(JobStatus::Processing)
        );

        tracker.set("clip_output.mp4", JobStatus::Completed).await;
        assert_eq!(
            tracker.get("clip_output.mp4").await,
            Some(JobStatus::Completed)
        );
    }

    #[tokio::test]
    async fn test_colliding_names_overwrite() {
        let tracker = JobTracker::new();

        tracker.set("clip_output.mp4", JobStatus::Completed).await;
        tracker.set("clip_output.mp4", JobStatus::Processing).await;

        assert_eq!(
            tracker.get("clip_output.mp4").await,
            Some(JobStatus::Processing)
        );
    }

    #[tokio::test]
    async fn test_url_cache() {
        let cache = SignedUrlCache::new();

        assert_eq!(cache.get("clip_output.mp4").await, None);

        cache
            .insert("clip_output.mp4", "https://example.com/signed")
            .await;
        assert_eq!(
            cache.get("clip_output.mp4").await.as_deref(),
            Some("https://example.com/signed")
        );
    }
}
