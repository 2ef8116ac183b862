//! Signed-URL download handler.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Download response.
#[derive(Serialize)]
pub struct DownloadResponse {
    pub signed_url: String,
}

/// Fetch the cached signed URL for a processed video.
///
/// The cache entry is returned verbatim; an entry past its TTL is not
/// revalidated, the storage provider rejects the expired signature.
pub async fn download_video(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> ApiResult<Json<DownloadResponse>> {
    let signed_url = state
        .signed_urls
        .get(&file_name)
        .await
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    Ok(Json(DownloadResponse { signed_url }))
}
