//! Sample video handlers.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Display-name to blob-name mapping for the bundled sample videos.
const SAMPLE_VIDEOS: &[(&str, &str)] = &[
    ("Battery", "sample_video1.mp4"),
    ("Smoothie", "sample_video2.mp4"),
];

fn sample_blob(name: &str) -> Option<&'static str> {
    SAMPLE_VIDEOS
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, blob)| *blob)
}

/// Sample video entry.
#[derive(Serialize)]
pub struct SampleVideo {
    pub name: String,
    pub url: String,
}

/// List the sample videos with fresh signed URLs.
///
/// URLs are generated per request and never cached.
pub async fn download_sample_videos(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SampleVideo>>> {
    let mut samples = Vec::with_capacity(SAMPLE_VIDEOS.len());

    for (name, blob) in SAMPLE_VIDEOS {
        let url = state
            .storage
            .presign_get(blob, state.config.signed_url_ttl)
            .await
            .map_err(|e| {
                error!("Error generating signed URL for {}: {}", blob, e);
                ApiError::internal(format!("Error generating signed URL for {}", blob))
            })?;
        samples.push(SampleVideo {
            name: name.to_string(),
            url,
        });
    }

    Ok(Json(samples))
}

/// Stream a sample video's bytes directly.
pub async fn serve_video(
    State(state): State<AppState>,
    Path(video_name): Path<String>,
) -> ApiResult<Response> {
    // Unmapped names fail before any storage call
    let blob = sample_blob(&video_name).ok_or_else(|| ApiError::not_found("Video not found"))?;

    let bytes = state.storage.download_bytes(blob).await.map_err(|e| {
        error!("Error serving video {}: {}", video_name, e);
        ApiError::internal(format!("Error serving video {}", video_name))
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "video/mp4")
        .header(header::CONTENT_LENGTH, bytes.len())
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal(e.to_string()))
}
