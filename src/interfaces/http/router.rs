//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;

use super::modules::clean_air_zones::{self, AppState};
use super::modules::correlation_id::correlation_id_middleware;
use super::modules::health::{self, HealthState};
use super::modules::metrics::{self, MetricsState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Clean Air Zones
        clean_air_zones::list_clean_air_zones,
        clean_air_zones::get_tariff,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Clean Air Zones
            clean_air_zones::CleanAirZoneDto,
            clean_air_zones::CleanAirZonesResponse,
            clean_air_zones::TariffResponse,
            clean_air_zones::InformationUrlsDto,
            clean_air_zones::RatesDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Clean Air Zones", description = "Clean Air Zone reference data and tariff details"),
    ),
    info(
        title = "Clean Air Zone Tariff Service API",
        version = "1.0.0",
        description = "Read-only REST API for Clean Air Zones and their tariffs",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Routes for the Clean Air Zone resource
pub fn clean_air_zone_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(clean_air_zones::list_clean_air_zones))
        .route(
            "/{clean_air_zone_id}/tariff",
            get(clean_air_zones::get_tariff),
        )
        .with_state(state)
}

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let health_state = HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = MetricsState {
        handle: prometheus_handle,
    };

    // CORS: public read-only reference data
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Prometheus scrape endpoint
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // Clean Air Zones
        .nest("/v1/clean-air-zones", clean_air_zone_routes(AppState { repos }))
        // Middleware
        .layer(middleware::from_fn(correlation_id_middleware))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
