//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - Re-export of `DomainResult` — standard result type for domain operations

use super::clean_air_zone::CleanAirZonesRepository;
use super::tariff::TariffRepository;

pub use super::error::DomainResult;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let zones = repos.clean_air_zones().find_all().await?;
///     let tariff = repos.tariffs().find_by_clean_air_zone_id(zone_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn clean_air_zones(&self) -> &dyn CleanAirZonesRepository;
    fn tariffs(&self) -> &dyn TariffRepository;
}
