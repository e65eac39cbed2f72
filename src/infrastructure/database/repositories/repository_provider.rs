//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::clean_air_zone::CleanAirZonesRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::tariff::TariffRepository;

use super::clean_air_zone_repository::SeaOrmCleanAirZonesRepository;
use super::tariff_repository::SeaOrmTariffRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    clean_air_zones: SeaOrmCleanAirZonesRepository,
    tariffs: SeaOrmTariffRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            clean_air_zones: SeaOrmCleanAirZonesRepository::new(db.clone()),
            tariffs: SeaOrmTariffRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn clean_air_zones(&self) -> &dyn CleanAirZonesRepository {
        &self.clean_air_zones
    }

    fn tariffs(&self) -> &dyn TariffRepository {
        &self.tariffs
    }
}
