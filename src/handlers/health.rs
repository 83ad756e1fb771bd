use axum::Json;
use tracing::debug;

use crate::handlers::{SERVICE_NAME, SERVICE_VERSION};
use crate::models::HealthResponse;
use crate::utils::time::now_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        timestamp: now_rfc3339(),
    })
}
