//! Clean Air Zone entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Clean Air Zone row.
///
/// The surrogate `id` preserves insertion order; the list endpoint
/// returns zones ordered by it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clean_air_zones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Zone UUID, stored as text
    #[sea_orm(unique)]
    pub clean_air_zone_id: String,

    /// Zone name (e.g., "Birmingham")
    pub name: String,

    /// URL of the official boundary map
    pub boundary_url: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
