//! Seed the Birmingham and Leeds reference records

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_clean_air_zones::CleanAirZones;
use super::m20240101_000002_create_tariffs::Tariffs;

const BIRMINGHAM_ID: &str = "0d7ab5c4-5fff-4935-8c4e-56267c0c9493";
const LEEDS_ID: &str = "39e54ed8-3ed2-441d-be3f-38fc9b70c8d3";

const BIRMINGHAM_BOUNDARY_URL: &str =
    "https://www.birmingham.gov.uk/info/20076/pollution/1763/a_clean_air_zone_for_birmingham/3";
const LEEDS_BOUNDARY_URL: &str = "https://www.arcgis.com/home/webmap/viewer.html?webmap=\
     de0120ae980b473982a3149ab072fdfc&extent=-1.733%2c53.7378%2c-1.333%2c53.8621";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().to_rfc3339();

        // Zones, in publication order
        let zones = Query::insert()
            .into_table(CleanAirZones::Table)
            .columns([
                CleanAirZones::CleanAirZoneId,
                CleanAirZones::Name,
                CleanAirZones::BoundaryUrl,
                CleanAirZones::CreatedAt,
                CleanAirZones::UpdatedAt,
            ])
            .values_panic([
                BIRMINGHAM_ID.into(),
                "Birmingham".into(),
                BIRMINGHAM_BOUNDARY_URL.into(),
                now.clone().into(),
                now.clone().into(),
            ])
            .values_panic([
                LEEDS_ID.into(),
                "Leeds".into(),
                LEEDS_BOUNDARY_URL.into(),
                now.clone().into(),
                now.clone().into(),
            ])
            .to_owned();
        manager.exec_stmt(zones).await?;

        fn tariff_columns() -> [Tariffs; 25] {
            [
                Tariffs::CleanAirZoneId,
                Tariffs::Name,
                Tariffs::TariffClass,
                Tariffs::BecomeCompliantUrl,
                Tariffs::EmissionsStandardsUrl,
                Tariffs::BoundaryUrl,
                Tariffs::ExemptionOrDiscountUrl,
                Tariffs::HoursOfOperationUrl,
                Tariffs::PayCazUrl,
                Tariffs::PricingUrl,
                Tariffs::MainInfoUrl,
                Tariffs::FinancialAssistanceUrl,
                Tariffs::BusRate,
                Tariffs::CarRate,
                Tariffs::MiniBusRate,
                Tariffs::CoachRate,
                Tariffs::HgvRate,
                Tariffs::LargeVanRate,
                Tariffs::MopedRate,
                Tariffs::MotorcycleRate,
                Tariffs::PhvRate,
                Tariffs::SmallVanRate,
                Tariffs::TaxiRate,
                Tariffs::CreatedAt,
                Tariffs::UpdatedAt,
            ]
        }

        // Birmingham is class D: buses, coaches, HGVs and light
        // vehicles pay; two-wheelers are exempt.
        let birmingham = Query::insert()
            .into_table(Tariffs::Table)
            .columns(tariff_columns())
            .values_panic([
                BIRMINGHAM_ID.into(),
                "Birmingham".into(),
                "D".into(),
                "https://www.gov.uk/guidance/driving-in-a-clean-air-zone".into(),
                "https://www.gov.uk/guidance/driving-in-a-clean-air-zone#vehicles-that-meet-emission-standards".into(),
                BIRMINGHAM_BOUNDARY_URL.into(),
                "https://www.birmingham.gov.uk/info/20076/pollution/1766/exemptions".into(),
                "https://www.birmingham.gov.uk/info/20076/pollution/1763/a_clean_air_zone_for_birmingham".into(),
                "https://www.gov.uk/clean-air-zones".into(),
                "https://www.gov.uk/guidance/driving-in-a-clean-air-zone#charges".into(),
                "https://www.birmingham.gov.uk/info/20076/pollution/1763/a_clean_air_zone_for_birmingham".into(),
                "https://www.birmingham.gov.uk/info/20076/pollution/1767/financial_assistance".into(),
                "50.00".into(),
                "8.00".into(),
                "8.00".into(),
                "50.00".into(),
                "50.00".into(),
                "8.00".into(),
                "0.00".into(),
                "0.00".into(),
                "8.00".into(),
                "8.00".into(),
                "8.00".into(),
                now.clone().into(),
                now.clone().into(),
            ])
            .to_owned();
        manager.exec_stmt(birmingham).await?;

        // Leeds is class B: buses, coaches, HGVs, taxis and PHVs only.
        let leeds = Query::insert()
            .into_table(Tariffs::Table)
            .columns(tariff_columns())
            .values_panic([
                LEEDS_ID.into(),
                "Leeds".into(),
                "B".into(),
                "https://www.gov.uk/guidance/driving-in-a-clean-air-zone".into(),
                "https://www.gov.uk/guidance/driving-in-a-clean-air-zone#vehicles-that-meet-emission-standards".into(),
                LEEDS_BOUNDARY_URL.into(),
                "https://www.leeds.gov.uk/business/environmental-health-for-business/air-quality/exemptions".into(),
                "https://www.leeds.gov.uk/business/environmental-health-for-business/air-quality".into(),
                "https://www.gov.uk/clean-air-zones".into(),
                "https://www.gov.uk/guidance/driving-in-a-clean-air-zone#charges".into(),
                "https://www.leeds.gov.uk/business/environmental-health-for-business/air-quality".into(),
                "https://www.leeds.gov.uk/business/environmental-health-for-business/air-quality/support".into(),
                "50.00".into(),
                "0.00".into(),
                "0.00".into(),
                "50.00".into(),
                "50.00".into(),
                "0.00".into(),
                "0.00".into(),
                "0.00".into(),
                "12.50".into(),
                "0.00".into(),
                "12.50".into(),
                now.clone().into(),
                now.into(),
            ])
            .to_owned();
        manager.exec_stmt(leeds).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let tariffs = Query::delete()
            .from_table(Tariffs::Table)
            .cond_where(
                Expr::col(Tariffs::CleanAirZoneId).is_in([BIRMINGHAM_ID, LEEDS_ID]),
            )
            .to_owned();
        manager.exec_stmt(tariffs).await?;

        let zones = Query::delete()
            .from_table(CleanAirZones::Table)
            .cond_where(
                Expr::col(CleanAirZones::CleanAirZoneId).is_in([BIRMINGHAM_ID, LEEDS_ID]),
            )
            .to_owned();
        manager.exec_stmt(zones).await
    }
}
