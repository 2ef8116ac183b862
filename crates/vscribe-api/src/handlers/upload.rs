//! Video upload handler.

use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use vscribe_models::{output_video_name, sanitize_filename, JobStatus};

use crate::auth::verify_api_key;
use crate::error::{ApiError, ApiResult};
use crate::pipeline;
use crate::state::AppState;

/// Upload response.
#[derive(Serialize)]
pub struct UploadResponse {
    pub status: String,
    pub gcs_url: String,
    pub output_video_name: String,
}

/// Accept a multipart video upload and schedule its processing.
///
/// The response returns as soon as the upload has been persisted to the
/// bucket; the processing pipeline runs as a background task and is
/// observed only through the status endpoint.
pub async fn upload_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    verify_api_key(&state.config, &headers)?;

    let mut stored: Option<(String, PathBuf)> = None;
    let mut add_bg_music = false;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = sanitize_filename(field.file_name().unwrap_or_default());
                let scratch_path = state.config.scratch_dir.join(&filename);
                if let Err(e) = persist_field(field, &scratch_path).await {
                    // Half-written scratch file, removal is best-effort
                    let _ = tokio::fs::remove_file(&scratch_path).await;
                    return Err(e);
                }
                stored = Some((filename, scratch_path));
            }
            Some("add_bg_music") => {
                let value = field.text().await.map_err(multipart_error)?;
                add_bg_music = value == "true";
            }
            _ => {}
        }
    }

    let (filename, scratch_path) =
        stored.ok_or_else(|| ApiError::bad_request("file field is required"))?;

    let content_type = if filename.ends_with(".mp4") {
        "video/mp4"
    } else {
        "application/octet-stream"
    };

    let upload_result = state
        .storage
        .upload_file(&scratch_path, &filename, content_type)
        .await;

    // Scratch file cleanup is best-effort either way
    if let Err(e) = tokio::fs::remove_file(&scratch_path).await {
        warn!("Failed to remove scratch file {}: {}", scratch_path.display(), e);
    }
    upload_result?;

    let gcs_url = state.storage.public_url(&filename);
    let output_name = output_video_name(&filename);

    state.jobs.set(&output_name, JobStatus::Processing).await;

    info!(
        filename = %filename,
        output_name = %output_name,
        add_bg_music,
        "Upload stored, scheduling processing"
    );

    tokio::spawn(pipeline::process_video_task(
        state.clone(),
        gcs_url.clone(),
        output_name.clone(),
        add_bg_music,
    ));

    Ok(Json(UploadResponse {
        status: "processing".to_string(),
        gcs_url,
        output_video_name: output_name,
    }))
}

/// Stream a multipart field to a scratch file chunk by chunk, so large
/// uploads are never buffered whole in memory.
async fn persist_field(mut field: Field<'_>, path: &Path) -> ApiResult<()> {
    let mut out = tokio::fs::File::create(path)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to persist upload: {}", e)))?;

    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        out.write_all(&chunk)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to persist upload: {}", e)))?;
    }

    out.flush()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to persist upload: {}", e)))?;

    Ok(())
}

/// Map multipart read failures: a tripped body limit is 413, anything
/// else is a malformed request.
fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::bad_request(format!("Invalid multipart payload: {}", e.body_text()))
    }
}
