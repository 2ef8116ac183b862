//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::download::download_video;
use crate::handlers::health::{greeting, health};
use crate::handlers::samples::{download_sample_videos, serve_video};
use crate::handlers::status::update_status;
use crate::handlers::upload::upload_video;
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health))
        .route("/upload_video", post(upload_video))
        .route("/update_status/:output_name", get(update_status))
        .route("/download_video/:file_name", get(download_video))
        .route("/download_sample_videos", get(download_sample_videos))
        .route("/serve_video/:video_name", get(serve_video))
        // axum's built-in body limit defaults to 2 MiB, far below the
        // configured upload cap, so it has to be raised explicitly
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
