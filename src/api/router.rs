//! API Router with Swagger UI

use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{ChargeBatchResponse, PriceBatchRequest};
use crate::api::handlers::{charges, health, metrics};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Charges
        charges::calculate_costs,
    ),
    components(
        schemas(
            PriceBatchRequest,
            ChargeBatchResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check. Use for availability monitoring (uptime, ping, readiness)."),
        (name = "Charges", description = "Delivery/hidden-charge calculation across pharmacy vendors. Vendor keys are case-sensitive: `apollopharmacy`, `kauverymeds`, `medkart`, `mrmed`, `netmeds`, `pharmeasy`, `tata1mg`, `truemeds`, `wellnessforever`. Entries that cannot be priced (unknown vendor, price below 1) are returned as `null` without failing the batch."),
    ),
    info(
        title = "Pharmacy Delivery Charges API",
        version = "1.0.0",
        description = "REST API for estimating hidden/delivery charges across pharmacy vendors.

## Request format

`POST /cost` with `{\"prices\": {\"<vendor>\": <mrp>, ...}}`.

## Response format

`{\"delivery_costs\": {\"<vendor>\": <charge>, ...}}` — exactly one entry
per requested vendor. `null` means the entry could not be priced
(unknown vendor key or listed price below 1)."
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(prometheus_handle: PrometheusHandle) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            started_at: Instant::now(),
        });

    let charge_routes = Router::new().route("/cost", post(charges::calculate_costs));

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Charges
        .merge(charge_routes)
        // Prometheus
        .merge(metrics_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::record_http_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
