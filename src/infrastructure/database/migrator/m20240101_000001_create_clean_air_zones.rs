//! Create clean_air_zones table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CleanAirZones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CleanAirZones::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CleanAirZones::CleanAirZoneId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CleanAirZones::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CleanAirZones::BoundaryUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CleanAirZones::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CleanAirZones::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Zone UUIDs are unique across the table
        manager
            .create_index(
                Index::create()
                    .name("idx_clean_air_zones_uuid")
                    .table(CleanAirZones::Table)
                    .col(CleanAirZones::CleanAirZoneId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CleanAirZones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CleanAirZones {
    Table,
    Id,
    CleanAirZoneId,
    Name,
    BoundaryUrl,
    CreatedAt,
    UpdatedAt,
}
