//! Processing service request/response types.

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, ProcessingResult};

/// Request to process a stored video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Reference to the uploaded video in the bucket
    pub video_path: String,
    /// Whether to mix background music into the output
    #[serde(default)]
    pub add_bg_music: bool,
}

/// Raw result descriptor returned by the processing service.
///
/// The shape is loosely specified on the service side, so every field
/// is optional here and [`into_output`](Self::into_output) enforces
/// what a usable descriptor must carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Outcome status; "error" marks an explicit failure
    pub status: Option<String>,
    /// Reference to the processed output, present on success
    pub output_url: Option<String>,
    /// Human-readable detail, usually set on failure
    pub message: Option<String>,
}

/// Validated successful processing outcome.
#[derive(Debug, Clone)]
pub struct ProcessedVideo {
    /// Reference to the processed output in the bucket
    pub output_url: String,
}

impl ProcessDescriptor {
    /// Validate the descriptor shape and turn it into an outcome.
    pub fn into_output(self) -> ProcessingResult<ProcessedVideo> {
        let status = self
            .status
            .ok_or_else(|| ProcessingError::InvalidDescriptor("missing status field".into()))?;

        if status == "error" {
            return Err(ProcessingError::Failed(
                self.message.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        let output_url = self
            .output_url
            .ok_or_else(|| ProcessingError::InvalidDescriptor("missing output_url field".into()))?;

        Ok(ProcessedVideo { output_url })
    }
}
