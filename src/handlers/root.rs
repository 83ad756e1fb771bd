use axum::Json;
use std::collections::BTreeMap;
use tracing::debug;

use crate::calculator::Operation;
use crate::handlers::SERVICE_VERSION;
use crate::models::{ApiExample, ApiInfoResponse, CalculationRequest};

/// API documentation, also served for unmatched paths
pub async fn api_info() -> Json<ApiInfoResponse> {
    debug!("API info requested");

    let endpoints = BTreeMap::from([
        ("POST /calculate".to_string(), "Perform calculations".to_string()),
        ("GET /health".to_string(), "Health check".to_string()),
    ]);

    Json(ApiInfoResponse {
        service: "Calculator Backend API".to_string(),
        version: SERVICE_VERSION.to_string(),
        endpoints,
        example: ApiExample {
            url: "/calculate".to_string(),
            method: "POST".to_string(),
            body: CalculationRequest {
                a: 10.0,
                b: 5.0,
                operation: Operation::Add.as_str().to_string(),
            },
        },
    })
}
