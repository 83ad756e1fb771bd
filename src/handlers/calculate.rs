use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, warn};

use crate::calculator::Operation;
use crate::models::{CalculationRequest, CalculationResponse, ErrorResponse};
use crate::utils::time::now_rfc3339;

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const INVALID_OPERATION: &str =
    "Invalid operation. Supported operations: add, subtract, multiply, divide";
pub const METHOD_NOT_ALLOWED: &str = r#"{"error": "Method not allowed"}"#;

/// Perform a calculation
///
/// The body is decoded regardless of `Content-Type`; any decode failure is a 400.
/// A result that overflows to infinity is still a 200, with `result` written as `null`.
pub async fn calculate(
    body: Bytes,
) -> Result<(StatusCode, Json<CalculationResponse>), (StatusCode, Json<ErrorResponse>)> {
    let req = match CalculationRequest::from_body(&body) {
        Ok(req) => req,
        Err(e) => {
            warn!("Rejecting calculation request with invalid JSON: {}", e);
            return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_JSON))));
        }
    };

    let operation: Operation = match req.operation.parse() {
        Ok(op) => op,
        Err(e) => {
            warn!("{}", e);
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(INVALID_OPERATION)),
            ));
        }
    };

    let (status, result, error) = match operation.apply(req.a, req.b) {
        Ok(result) => {
            debug!("{} {} {} = {}", req.a, operation.as_str(), req.b, result);
            (StatusCode::OK, result, None)
        }
        Err(e) => {
            warn!("Calculation {} {} {} failed: {}", req.a, operation.as_str(), req.b, e);
            (StatusCode::BAD_REQUEST, 0.0, Some(e.to_string()))
        }
    };

    Ok((
        status,
        Json(CalculationResponse {
            result,
            operation: req.operation,
            a: req.a,
            b: req.b,
            error,
            timestamp: now_rfc3339(),
        }),
    ))
}

/// Any method other than POST on `/calculate`. The body is sent verbatim as plain text.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        METHOD_NOT_ALLOWED,
    )
}
