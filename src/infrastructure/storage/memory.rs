//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::clean_air_zone::{CleanAirZone, CleanAirZonesRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::tariff::{Tariff, TariffRepository};
use crate::domain::DomainResult;

/// In-memory repositories for development and testing
pub struct InMemoryRepositoryProvider {
    zones: InMemoryCleanAirZonesRepository,
    tariffs: InMemoryTariffRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            zones: InMemoryCleanAirZonesRepository {
                zones: DashMap::new(),
                zone_counter: AtomicI32::new(1),
            },
            tariffs: InMemoryTariffRepository {
                tariffs: DashMap::new(),
            },
        }
    }

    /// Register a zone; zones list in the order they were added
    pub fn add_zone(&self, zone: CleanAirZone) {
        let position = self.zones.zone_counter.fetch_add(1, Ordering::SeqCst);
        self.zones.zones.insert(position, zone);
    }

    pub fn add_tariff(&self, tariff: Tariff) {
        self.tariffs.tariffs.insert(tariff.clean_air_zone_id, tariff);
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn clean_air_zones(&self) -> &dyn CleanAirZonesRepository {
        &self.zones
    }

    fn tariffs(&self) -> &dyn TariffRepository {
        &self.tariffs
    }
}

struct InMemoryCleanAirZonesRepository {
    zones: DashMap<i32, CleanAirZone>,
    zone_counter: AtomicI32,
}

#[async_trait]
impl CleanAirZonesRepository for InMemoryCleanAirZonesRepository {
    async fn find_all(&self) -> DomainResult<Vec<CleanAirZone>> {
        let mut entries: Vec<(i32, CleanAirZone)> = self
            .zones
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(position, _)| *position);
        Ok(entries.into_iter().map(|(_, zone)| zone).collect())
    }
}

struct InMemoryTariffRepository {
    tariffs: DashMap<Uuid, Tariff>,
}

#[async_trait]
impl TariffRepository for InMemoryTariffRepository {
    async fn find_by_clean_air_zone_id(
        &self,
        clean_air_zone_id: Uuid,
    ) -> DomainResult<Option<Tariff>> {
        Ok(self
            .tariffs
            .get(&clean_air_zone_id)
            .map(|entry| entry.value().clone()))
    }
}

// ── Tests ──────────────────────────────────────────────────────
