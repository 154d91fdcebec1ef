//! Health check endpoint handlers.
//!
//! The record stores are injected capabilities without a shared raw handle,
//! so these probes report process liveness only; store connectivity problems
//! surface per-request as store errors.

use axum::{Router, http::StatusCode, response::Json, routing::get};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Health status enumeration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Process is up and serving
    Healthy,
}

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Basic health check
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
}

/// Basic health check endpoint.
///
/// # Responses
/// - `200 OK` - Service is up, with version and timestamp
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Liveness probe endpoint.
///
/// # Responses
/// - `200 OK` - Service is alive
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
