//! Axum HTTP API server.
//!
//! This crate provides:
//! - The upload / poll-status / fetch-signed-URL workflow
//! - Static bearer API-key check on uploads
//! - In-memory job tracker and signed-URL cache
//! - Background processing task per upload

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod tracker;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
pub use tracker::{JobTracker, SignedUrlCache};
