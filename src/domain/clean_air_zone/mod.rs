//! Clean Air Zone aggregate

pub mod model;
pub mod repository;

pub use model::CleanAirZone;
pub use repository::CleanAirZonesRepository;
