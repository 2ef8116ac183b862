//! Background processing pipeline.
//!
//! One task is spawned per upload and never awaited by the HTTP
//! response. There is no cancellation, timeout, or queue-depth limit;
//! failures are swallowed into the job tracker and clients discover
//! them only by polling.

use tracing::{error, info};

use vscribe_models::{blob_name_from_url, JobStatus};
use vscribe_processing::ProcessRequest;

use crate::state::AppState;

/// Run the processing pipeline for one uploaded video.
pub async fn process_video_task(
    state: AppState,
    video_url: String,
    output_name: String,
    add_bg_music: bool,
) {
    if let Err(e) = run(&state, &video_url, &output_name, add_bg_music).await {
        error!(output_name = %output_name, "Error processing video: {:#}", e);
        state.jobs.set(&output_name, JobStatus::Failed).await;
    }
}

async fn run(
    state: &AppState,
    video_url: &str,
    output_name: &str,
    add_bg_music: bool,
) -> anyhow::Result<()> {
    let request = ProcessRequest {
        video_path: video_url.to_string(),
        add_bg_music,
    };

    let output = state.processor.process(&request).await?;

    let processed_blob = blob_name_from_url(&output.output_url);
    let signed_url = state
        .storage
        .presign_get(&processed_blob, state.config.signed_url_ttl)
        .await?;

    info!(blob = %processed_blob, "Generated signed URL for processed video");

    // Cache entry first, then the terminal status: a completed job must
    // always have its URL ready by the time polling reports completion
    state.signed_urls.insert(&processed_blob, &signed_url).await;
    state.jobs.set(output_name, JobStatus::Completed).await;

    Ok(())
}
