//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;
use crate::error::AppError;

/// Health check response.
///
/// Returns service status and storage accessibility.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Data directory status
    pub storage: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Checks
///
/// - Data directory exists or can be created
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "storage": "accessible",
///   "timestamp": "2026-08-07T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If the data directory is unusable, returns standard error response.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    // Verify the document directory is reachable
    state.store.health().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        storage: "accessible".to_string(),
        timestamp: Utc::now(),
    }))
}
