//! # Clean Air Zone Tariff Service
//!
//! Read-only REST API exposing the UK Clean Air Zones and the tariff
//! (pricing) schedule associated with each zone.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities (zones, tariffs) and repository traits
//! - **infrastructure**: External concerns (SeaORM database, in-memory storage)
//! - **interfaces**: REST API with Swagger documentation

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
