//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_clean_air_zones;
mod m20240101_000002_create_tariffs;
mod m20240101_000003_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_clean_air_zones::Migration),
            Box::new(m20240101_000002_create_tariffs::Migration),
            Box::new(m20240101_000003_seed_reference_data::Migration),
        ]
    }
}
