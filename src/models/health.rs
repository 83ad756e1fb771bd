use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "calculator-backend")]
    pub service: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub timestamp: String,
}
