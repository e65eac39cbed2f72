//! Tariff domain entity

use rust_decimal::Decimal;
use uuid::Uuid;

/// Pricing schedule and informational links for one Clean Air Zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    /// Zone this tariff belongs to
    pub clean_air_zone_id: Uuid,
    /// Zone name (e.g., "Leeds")
    pub name: String,
    /// Charging class of the zone, a single uppercase letter (A-D)
    pub tariff_class: char,
    /// Official guidance links shown to drivers
    pub information_urls: InformationUrls,
    /// Daily charge per vehicle category
    pub rates: Rates,
}

impl Tariff {
    /// Check that the tariff satisfies its invariants:
    /// an uppercase ASCII tariff class and non-negative rates.
    pub fn is_valid(&self) -> bool {
        self.tariff_class.is_ascii_uppercase() && self.rates.all_non_negative()
    }
}

/// Fixed set of informational URLs published for a zone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformationUrls {
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

/// Daily charge per vehicle category.
///
/// Values are exact decimals; "5.50" stays "5.50" all the way to the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rates {
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

impl Rates {
    pub fn all_non_negative(&self) -> bool {
        [
            self.bus,
            self.car,
            self.mini_bus,
            self.coach,
            self.hgv,
            self.large_van,
            self.moped,
            self.motorcycle,
            self.phv,
            self.small_van,
            self.taxi,
        ]
        .iter()
        .all(|rate| !rate.is_sign_negative())
    }
}

// ── Tests ──────────────────────────────────────────────────────
