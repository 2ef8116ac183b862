//! Status polling handler.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use vscribe_models::status::STILL_PROCESSING_MESSAGE;

use crate::state::AppState;

/// Status response.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Poll the processing status for an output video name.
///
/// An unknown name gets the generic still-processing message; whether
/// the job has not started yet or never existed is indistinguishable
/// here by design.
pub async fn update_status(
    State(state): State<AppState>,
    Path(output_name): Path<String>,
) -> Json<StatusResponse> {
    let status = state
        .jobs
        .get(&output_name)
        .await
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| STILL_PROCESSING_MESSAGE.to_string());

    Json(StatusResponse { status })
}
