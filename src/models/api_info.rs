use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::CalculationRequest;

/// Self-description served at the root path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoResponse {
    pub service: String,
    pub version: String,
    /// "METHOD path" to a one-line description
    pub endpoints: BTreeMap<String, String>,
    pub example: ApiExample,
}

/// Example request against the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiExample {
    pub url: String,
    pub method: String,
    pub body: CalculationRequest,
}
