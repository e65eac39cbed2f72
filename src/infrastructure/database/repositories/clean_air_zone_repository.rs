//! SeaORM implementation of CleanAirZonesRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::domain::clean_air_zone::{CleanAirZone, CleanAirZonesRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::clean_air_zone;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::StorageError(e.to_string())
}

fn entity_to_domain(z: clean_air_zone::Model) -> DomainResult<CleanAirZone> {
    let clean_air_zone_id = Uuid::parse_str(&z.clean_air_zone_id).map_err(|e| {
        DomainError::CorruptRecord(format!(
            "clean air zone {} has malformed UUID: {}",
            z.id, e
        ))
    })?;
    Ok(CleanAirZone {
        clean_air_zone_id,
        name: z.name,
        boundary_url: z.boundary_url,
    })
}

// ── SeaOrmCleanAirZonesRepository ───────────────────────────────

pub struct SeaOrmCleanAirZonesRepository {
    db: DatabaseConnection,
}

impl SeaOrmCleanAirZonesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CleanAirZonesRepository for SeaOrmCleanAirZonesRepository {
    async fn find_all(&self) -> DomainResult<Vec<CleanAirZone>> {
        // Surrogate id ascending = insertion order
        let models = clean_air_zone::Entity::find()
            .order_by_asc(clean_air_zone::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        debug!("Loaded {} clean air zones", models.len());
        models.into_iter().map(entity_to_domain).collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_model() -> clean_air_zone::Model {
        clean_air_zone::Model {
            id: 1,
            clean_air_zone_id: "0d7ab5c4-5fff-4935-8c4e-56267c0c9493".into(),
            name: "Birmingham".into(),
            boundary_url: "https://www.birmingham.gov.uk/caz".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn converts_row_to_domain() {
        let zone = entity_to_domain(sample_model()).unwrap();
        assert_eq!(
            zone.clean_air_zone_id.to_string(),
            "0d7ab5c4-5fff-4935-8c4e-56267c0c9493"
        );
        assert_eq!(zone.name, "Birmingham");
        assert_eq!(zone.boundary_url, "https://www.birmingham.gov.uk/caz");
    }

    #[test]
    fn malformed_uuid_is_a_corrupt_record() {
        let mut model = sample_model();
        model.clean_air_zone_id = "not-a-uuid".into();
        let err = entity_to_domain(model).unwrap_err();
        assert!(matches!(err, DomainError::CorruptRecord(_)));
    }
}
