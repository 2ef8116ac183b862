//! Greeting and health handlers.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Greeting response.
#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Root greeting endpoint.
pub async fn greeting() -> Json<GreetingResponse> {
    let name = std::env::var("NAME").unwrap_or_else(|_| "World".to_string());
    Json(GreetingResponse {
        message: format!("Hello {}!", name),
    })
}

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
