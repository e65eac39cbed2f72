//! Clean Air Zone REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;
use uuid::Uuid;

use super::dto::{CleanAirZonesResponse, TariffResponse};
use crate::domain::RepositoryProvider;

/// Shared state for the Clean Air Zone routes
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/v1/clean-air-zones",
    tag = "Clean Air Zones",
    responses(
        (status = 200, description = "All known Clean Air Zones, in publication order", body = CleanAirZonesResponse)
    )
)]
pub async fn list_clean_air_zones(
    State(state): State<AppState>,
) -> Result<Json<CleanAirZonesResponse>, StatusCode> {
    match state.repos.clean_air_zones().find_all().await {
        Ok(zones) => Ok(Json(zones.into())),
        Err(e) => {
            error!("Failed to list clean air zones: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[utoipa::path(
    get,
    path = "/v1/clean-air-zones/{clean_air_zone_id}/tariff",
    tag = "Clean Air Zones",
    params(("clean_air_zone_id" = String, Path, description = "Zone UUID")),
    responses(
        (status = 200, description = "Tariff details", body = TariffResponse),
        (status = 404, description = "Unknown zone or malformed UUID")
    )
)]
pub async fn get_tariff(
    State(state): State<AppState>,
    Path(clean_air_zone_id): Path<String>,
) -> Result<Json<TariffResponse>, StatusCode> {
    // A segment that is not a UUID is indistinguishable from an unknown zone
    let Ok(zone_id) = Uuid::parse_str(&clean_air_zone_id) else {
        return Err(StatusCode::NOT_FOUND);
    };

    match state.repos.tariffs().find_by_clean_air_zone_id(zone_id).await {
        Ok(Some(tariff)) => Ok(Json(tariff.into())),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to get tariff for {}: {}", zone_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use axum::{middleware, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::domain::clean_air_zone::{CleanAirZone, CleanAirZonesRepository};
    use crate::domain::tariff::{InformationUrls, Rates, Tariff, TariffRepository};
    use crate::domain::{DomainError, DomainResult};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use crate::interfaces::http::modules::correlation_id::{
        correlation_id_middleware, CORRELATION_ID_HEADER,
    };
    use crate::interfaces::http::router::clean_air_zone_routes;

    const SOME_CORRELATION_ID: &str = "63be7528-7efd-4f31-ae68-11a6b709ff1c";
    const CLEAN_AIR_ZONE_ID: &str = "dc1efcaf-a2cf-41ec-aa37-ea4b28a20a1d";

    fn app(repos: Arc<dyn RepositoryProvider>) -> Router {
        Router::new()
            .nest("/v1/clean-air-zones", clean_air_zone_routes(AppState { repos }))
            .layer(middleware::from_fn(correlation_id_middleware))
    }

    fn get_with_correlation(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("accept", "application/json")
            .header(CORRELATION_ID_HEADER, SOME_CORRELATION_ID)
            .body(Body::empty())
            .unwrap()
    }

    fn seeded_provider() -> Arc<InMemoryRepositoryProvider> {
        let repos = InMemoryRepositoryProvider::new();
        repos.add_zone(CleanAirZone::new(
            "0d7ab5c4-5fff-4935-8c4e-56267c0c9493".parse().unwrap(),
            "Birmingham",
            "https://www.birmingham.gov.uk/info/20076/pollution/1763/a_clean_air_zone_for_birmingham/3",
        ));
        repos.add_zone(CleanAirZone::new(
            "39e54ed8-3ed2-441d-be3f-38fc9b70c8d3".parse().unwrap(),
            "Leeds",
            "https://www.arcgis.com/home/webmap/viewer.html?webmap=de0120ae980b473982a3149ab072fdfc&extent=-1.733%2c53.7378%2c-1.333%2c53.8621",
        ));
        Arc::new(repos)
    }

    fn sample_tariff() -> Tariff {
        Tariff {
            clean_air_zone_id: CLEAN_AIR_ZONE_ID.parse().unwrap(),
            name: "Leeds".into(),
            tariff_class: 'A',
            information_urls: InformationUrls {
                become_compliant: "www.test.uk".into(),
                emissions_standards: "www.test.uk".into(),
                boundary: "www.test.uk".into(),
                exemption_or_discount: "www.test.uk".into(),
                hours_of_operation: "www.test.uk".into(),
                pay_caz: "www.test.uk".into(),
                pricing: "www.test.uk".into(),
                main_info: "www.test.uk".into(),
                financial_assistance: "www.test.uk".into(),
            },
            rates: Rates {
                bus: "5.50".parse().unwrap(),
                car: "15.50".parse().unwrap(),
                mini_bus: "25.00".parse().unwrap(),
                coach: "15.60".parse().unwrap(),
                hgv: "5.69".parse().unwrap(),
                large_van: "100.00".parse().unwrap(),
                moped: "49.49".parse().unwrap(),
                motorcycle: "80.01".parse().unwrap(),
                phv: "80.10".parse().unwrap(),
                small_van: "80.00".parse().unwrap(),
                taxi: "2.00".parse().unwrap(),
            },
        }
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn returns_list_of_clean_air_zones() {
        let response = app(seeded_provider())
            .oneshot(get_with_correlation("/v1/clean-air-zones"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CORRELATION_ID_HEADER],
            SOME_CORRELATION_ID
        );
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body = json_body(response).await;
        assert_eq!(
            body["cleanAirZones"][0]["cleanAirZoneId"],
            "0d7ab5c4-5fff-4935-8c4e-56267c0c9493"
        );
        assert_eq!(body["cleanAirZones"][0]["name"], "Birmingham");
        assert_eq!(
            body["cleanAirZones"][0]["boundaryUrl"],
            "https://www.birmingham.gov.uk/info/20076/pollution/1763/a_clean_air_zone_for_birmingham/3"
        );
        assert_eq!(
            body["cleanAirZones"][1]["cleanAirZoneId"],
            "39e54ed8-3ed2-441d-be3f-38fc9b70c8d3"
        );
        assert_eq!(body["cleanAirZones"][1]["name"], "Leeds");
    }

    #[tokio::test]
    async fn returns_empty_list_with_status_ok() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let response = app(repos)
            .oneshot(get_with_correlation("/v1/clean-air-zones"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["cleanAirZones"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn returns_tariff_and_status_ok() {
        let repos = seeded_provider();
        repos.add_tariff(sample_tariff());

        let response = app(repos)
            .oneshot(get_with_correlation(&format!(
                "/v1/clean-air-zones/{}/tariff",
                CLEAN_AIR_ZONE_ID
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CORRELATION_ID_HEADER],
            SOME_CORRELATION_ID
        );

        let body = json_body(response).await;
        assert_eq!(body["cleanAirZoneId"], CLEAN_AIR_ZONE_ID);
        assert_eq!(body["name"], "Leeds");
        assert_eq!(body["tariffClass"], "A");
        assert_eq!(body["informationUrls"]["payCaz"], "www.test.uk");
        assert_eq!(body["rates"]["bus"], "5.50");
        assert_eq!(body["rates"]["largeVan"], "100.00");
        assert_eq!(body["rates"]["taxi"], "2.00");
    }

    #[tokio::test]
    async fn returns_not_found_when_tariff_does_not_exist() {
        let response = app(seeded_provider())
            .oneshot(get_with_correlation(&format!(
                "/v1/clean-air-zones/{}/tariff",
                CLEAN_AIR_ZONE_ID
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[CORRELATION_ID_HEADER],
            SOME_CORRELATION_ID
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn returns_not_found_when_uuid_is_invalid() {
        let response = app(seeded_provider())
            .oneshot(get_with_correlation("/v1/clean-air-zones/asd/tariff"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // Repository failures surface as a plain 500

    struct FailingProvider {
        zones: FailingZones,
        tariffs: FailingTariffs,
    }

    struct FailingZones;
    struct FailingTariffs;

    #[async_trait]
    impl CleanAirZonesRepository for FailingZones {
        async fn find_all(&self) -> DomainResult<Vec<CleanAirZone>> {
            Err(DomainError::StorageError("connection lost".into()))
        }
    }

    #[async_trait]
    impl TariffRepository for FailingTariffs {
        async fn find_by_clean_air_zone_id(&self, _: Uuid) -> DomainResult<Option<Tariff>> {
            Err(DomainError::StorageError("connection lost".into()))
        }
    }

    impl RepositoryProvider for FailingProvider {
        fn clean_air_zones(&self) -> &dyn CleanAirZonesRepository {
            &self.zones
        }
        fn tariffs(&self) -> &dyn TariffRepository {
            &self.tariffs
        }
    }

    #[tokio::test]
    async fn repository_failure_maps_to_internal_server_error() {
        let repos = Arc::new(FailingProvider {
            zones: FailingZones,
            tariffs: FailingTariffs,
        });

        let response = app(repos.clone())
            .oneshot(get_with_correlation("/v1/clean-air-zones"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = app(repos)
            .oneshot(get_with_correlation(&format!(
                "/v1/clean-air-zones/{}/tariff",
                CLEAN_AIR_ZONE_ID
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // failures still carry the correlation header
        assert_eq!(
            response.headers()[CORRELATION_ID_HEADER],
            SOME_CORRELATION_ID
        );
    }
}
