//! Tariff entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tariff row, one per Clean Air Zone.
///
/// Rates are stored as text because SQLite has no exact decimal type;
/// the repository parses them into `rust_decimal::Decimal` so values
/// like "5.50" survive storage without rounding.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tariffs")]
pub struct Model {
    /// Zone UUID, stored as text
    #[sea_orm(primary_key, auto_increment = false)]
    pub clean_air_zone_id: String,

    /// Zone name (e.g., "Leeds")
    pub name: String,

    /// Charging class, a single uppercase letter
    #[sea_orm(column_type = "String(StringLen::N(1))")]
    pub tariff_class: String,

    pub become_compliant_url: String,

    pub emissions_standards_url: String,

    pub boundary_url: String,

    pub exemption_or_discount_url: String,

    pub hours_of_operation_url: String,

    pub pay_caz_url: String,

    pub pricing_url: String,

    pub main_info_url: String,

    pub financial_assistance_url: String,

    pub bus_rate: String,

    pub car_rate: String,

    pub mini_bus_rate: String,

    pub coach_rate: String,

    pub hgv_rate: String,

    pub large_van_rate: String,

    pub moped_rate: String,

    pub motorcycle_rate: String,

    pub phv_rate: String,

    pub small_van_rate: String,

    pub taxi_rate: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
