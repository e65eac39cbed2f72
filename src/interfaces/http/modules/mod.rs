pub mod clean_air_zones;
pub mod correlation_id;
pub mod health;
pub mod metrics;
