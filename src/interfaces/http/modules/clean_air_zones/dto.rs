//! Clean Air Zone and Tariff DTOs
//!
//! Wire field names are camelCase; rates serialize as exact decimal
//! strings so "5.50" reaches the caller unrounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{CleanAirZone, InformationUrls, Rates, Tariff};

/// One Clean Air Zone record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanAirZoneDto {
    pub clean_air_zone_id: Uuid,
    pub name: String,
    pub boundary_url: String,
}

impl From<CleanAirZone> for CleanAirZoneDto {
    fn from(z: CleanAirZone) -> Self {
        Self {
            clean_air_zone_id: z.clean_air_zone_id,
            name: z.name,
            boundary_url: z.boundary_url,
        }
    }
}

/// Zone list response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanAirZonesResponse {
    pub clean_air_zones: Vec<CleanAirZoneDto>,
}

impl From<Vec<CleanAirZone>> for CleanAirZonesResponse {
    fn from(zones: Vec<CleanAirZone>) -> Self {
        Self {
            clean_air_zones: zones.into_iter().map(Into::into).collect(),
        }
    }
}

/// Tariff details for one zone
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TariffResponse {
    pub clean_air_zone_id: Uuid,
    pub name: String,
    /// Single uppercase letter (zone charging class)
    #[schema(value_type = String)]
    pub tariff_class: char,
    pub information_urls: InformationUrlsDto,
    pub rates: RatesDto,
}

impl From<Tariff> for TariffResponse {
    fn from(t: Tariff) -> Self {
        Self {
            clean_air_zone_id: t.clean_air_zone_id,
            name: t.name,
            tariff_class: t.tariff_class,
            information_urls: t.information_urls.into(),
            rates: t.rates.into(),
        }
    }
}

/// Official guidance links for a zone
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InformationUrlsDto {
    pub become_compliant: String,
    pub emissions_standards: String,
    pub boundary: String,
    pub exemption_or_discount: String,
    pub hours_of_operation: String,
    pub pay_caz: String,
    pub pricing: String,
    pub main_info: String,
    pub financial_assistance: String,
}

impl From<InformationUrls> for InformationUrlsDto {
    fn from(u: InformationUrls) -> Self {
        Self {
            become_compliant: u.become_compliant,
            emissions_standards: u.emissions_standards,
            boundary: u.boundary,
            exemption_or_discount: u.exemption_or_discount,
            hours_of_operation: u.hours_of_operation,
            pay_caz: u.pay_caz,
            pricing: u.pricing,
            main_info: u.main_info,
            financial_assistance: u.financial_assistance,
        }
    }
}

/// Daily charge per vehicle category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatesDto {
    pub bus: Decimal,
    pub car: Decimal,
    pub mini_bus: Decimal,
    pub coach: Decimal,
    pub hgv: Decimal,
    pub large_van: Decimal,
    pub moped: Decimal,
    pub motorcycle: Decimal,
    pub phv: Decimal,
    pub small_van: Decimal,
    pub taxi: Decimal,
}

impl From<Rates> for RatesDto {
    fn from(r: Rates) -> Self {
        Self {
            bus: r.bus,
            car: r.car,
            mini_bus: r.mini_bus,
            coach: r.coach,
            hgv: r.hgv,
            large_van: r.large_van,
            moped: r.moped,
            motorcycle: r.motorcycle,
            phv: r.phv,
            small_van: r.small_van,
            taxi: r.taxi,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
