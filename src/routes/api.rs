use axum::{
    routing::{any, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    docs::ApiDoc,
    handlers::{api_info, calculate, health_check, method_not_allowed},
    routes::cors::{allow_headers_header, allow_methods_header, build_cors_layer},
};

/// Create API routes
pub fn create_api_routes(config: &Config) -> Router {
    Router::new()
        .route("/", any(api_info))
        .route("/health", any(health_check))
        .route("/calculate", post(calculate).fallback(method_not_allowed))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Unmatched paths get the API description
        .fallback(api_info)
        // Added last so it also covers the fallback
        .layer(build_cors_layer(config))
        // Preflight responses already carry both, so these only fill plain responses
        .layer(allow_methods_header())
        .layer(allow_headers_header())
}
