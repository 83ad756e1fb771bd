use utoipa::OpenApi;
use crate::models::*;

/// API documentation endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (
            status = 200,
            description = "Service description and example request",
            body = ApiInfoResponse
        )
    )
)]
#[allow(dead_code)]
pub async fn api_info_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Perform a calculation
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Calculation succeeded", body = CalculationResponse),
        (
            status = 400,
            description = "Invalid JSON or unsupported operation (`ErrorResponse`), \
                or division by zero (`CalculationResponse` with `error` set)",
            body = CalculationFailure
        ),
        (status = 405, description = "Method other than POST")
    )
)]
#[allow(dead_code)]
pub async fn calculate_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        api_info_doc,
        health_check_doc,
        calculate_doc,
    ),
    components(
        schemas(
            ApiInfoResponse,
            ApiExample,
            HealthResponse,
            CalculationRequest,
            CalculationResponse,
            CalculationFailure,
            ErrorResponse,
        )
    ),
    tags(
        (name = "calculator", description = "Calculator endpoints")
    )
)]
pub struct ApiDoc;
