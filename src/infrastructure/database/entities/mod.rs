//! SeaORM entity definitions

pub mod clean_air_zone;
pub mod tariff;
