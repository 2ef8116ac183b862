//! Job status for the upload-and-process workflow.
//!
//! Statuses are polled by clients as human-readable strings, so the
//! display strings here are part of the wire contract.

use serde::{Deserialize, Serialize};

/// Fallback message for output names the tracker has never seen.
///
/// A name that was queried before the background task initialized its
/// entry and a name that never existed are indistinguishable; both get
/// this message.
pub const STILL_PROCESSING_MESSAGE: &str = "Video is still processing or does not exist";

/// Processing status of a single uploaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Background task has been scheduled or is running
    #[default]
    Processing,
    /// Processed video is ready and a signed URL has been cached
    Completed,
    /// Processing service reported an error or the task itself failed
    Failed,
}

impl JobStatus {
    /// Client-facing status string.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Processing => "Processing...",
            JobStatus::Completed => "Processing completed",
            JobStatus::Failed => "Error processing video",
        }
    }

    /// Check if this is a terminal state (no more updates expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
