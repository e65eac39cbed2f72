//! Clean Air Zone repository interface

use async_trait::async_trait;

use super::model::CleanAirZone;
use crate::domain::DomainResult;

/// Lookup of all known Clean Air Zones.
///
/// `find_all` returns zones in stable insertion order; callers rely on it.
#[async_trait]
pub trait CleanAirZonesRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<CleanAirZone>>;
}
