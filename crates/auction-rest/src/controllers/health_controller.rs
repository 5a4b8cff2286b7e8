//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Ready once the database answers.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    match state.database.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
