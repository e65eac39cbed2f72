//! Tariff aggregate
//!
//! Contains the Tariff entity, its informational links and per-vehicle rates.

pub mod model;
pub mod repository;

pub use model::{InformationUrls, Rates, Tariff};
pub use repository::TariffRepository;
