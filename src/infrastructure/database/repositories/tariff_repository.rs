//! SeaORM implementation of TariffRepository

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::tariff::{InformationUrls, Rates, Tariff, TariffRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::tariff;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::StorageError(e.to_string())
}

fn parse_rate(zone: &str, column: &str, value: &str) -> DomainResult<Decimal> {
    value.parse().map_err(|e| {
        DomainError::CorruptRecord(format!(
            "tariff {} has unparseable {} rate {:?}: {}",
            zone, column, value, e
        ))
    })
}

fn parse_class(zone: &str, value: &str) -> DomainResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DomainError::CorruptRecord(format!(
            "tariff {} has malformed tariff class {:?}",
            zone, value
        ))),
    }
}

fn entity_to_domain(t: tariff::Model) -> DomainResult<Tariff> {
    let clean_air_zone_id = Uuid::parse_str(&t.clean_air_zone_id).map_err(|e| {
        DomainError::CorruptRecord(format!(
            "tariff {} has malformed UUID: {}",
            t.clean_air_zone_id, e
        ))
    })?;
    let zone = &t.clean_air_zone_id;

    Ok(Tariff {
        clean_air_zone_id,
        tariff_class: parse_class(zone, &t.tariff_class)?,
        information_urls: InformationUrls {
            become_compliant: t.become_compliant_url,
            emissions_standards: t.emissions_standards_url,
            boundary: t.boundary_url,
            exemption_or_discount: t.exemption_or_discount_url,
            hours_of_operation: t.hours_of_operation_url,
            pay_caz: t.pay_caz_url,
            pricing: t.pricing_url,
            main_info: t.main_info_url,
            financial_assistance: t.financial_assistance_url,
        },
        rates: Rates {
            bus: parse_rate(zone, "bus", &t.bus_rate)?,
            car: parse_rate(zone, "car", &t.car_rate)?,
            mini_bus: parse_rate(zone, "mini_bus", &t.mini_bus_rate)?,
            coach: parse_rate(zone, "coach", &t.coach_rate)?,
            hgv: parse_rate(zone, "hgv", &t.hgv_rate)?,
            large_van: parse_rate(zone, "large_van", &t.large_van_rate)?,
            moped: parse_rate(zone, "moped", &t.moped_rate)?,
            motorcycle: parse_rate(zone, "motorcycle", &t.motorcycle_rate)?,
            phv: parse_rate(zone, "phv", &t.phv_rate)?,
            small_van: parse_rate(zone, "small_van", &t.small_van_rate)?,
            taxi: parse_rate(zone, "taxi", &t.taxi_rate)?,
        },
        name: t.name,
    })
}

// ── SeaOrmTariffRepository ──────────────────────────────────────

pub struct SeaOrmTariffRepository {
    db: DatabaseConnection,
}

impl SeaOrmTariffRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TariffRepository for SeaOrmTariffRepository {
    async fn find_by_clean_air_zone_id(
        &self,
        clean_air_zone_id: Uuid,
    ) -> DomainResult<Option<Tariff>> {
        let model = tariff::Entity::find_by_id(clean_air_zone_id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        debug!(
            "Tariff lookup for {}: {}",
            clean_air_zone_id,
            if model.is_some() { "hit" } else { "miss" }
        );
        model.map(entity_to_domain).transpose()
    }
}

// ── Tests ──────────────────────────────────────────────────────
