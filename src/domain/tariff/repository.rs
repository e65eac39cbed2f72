//! Tariff repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Tariff;
use crate::domain::DomainResult;

#[async_trait]
pub trait TariffRepository: Send + Sync {
    async fn find_by_clean_air_zone_id(
        &self,
        clean_air_zone_id: Uuid,
    ) -> DomainResult<Option<Tariff>>;
}
