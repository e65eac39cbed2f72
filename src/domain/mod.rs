//! Domain layer: entities, value objects and repository traits

pub mod clean_air_zone;
pub mod error;
pub mod repositories;
pub mod tariff;

pub use clean_air_zone::{CleanAirZone, CleanAirZonesRepository};
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use tariff::{InformationUrls, Rates, Tariff, TariffRepository};
