//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::logging::request_span;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::submit_payment, handlers::health_check),
    components(schemas(
        crate::api::types::PaymentParams,
        crate::api::types::HealthResponse,
        crate::domain::OperationResult,
    )),
    tags(
        (name = "payments", description = "Payment record submission"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Cargo Payments API",
        version = "0.1.0",
        description = "Stores card records for shipments using parameterized writes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Payment records
        .route(
            "/v1/payments",
            get(handlers::submit_payment).post(handlers::submit_payment),
        )
        // Health
        .route("/v1/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
}
