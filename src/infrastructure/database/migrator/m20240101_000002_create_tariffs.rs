//! Create tariffs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tariffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tariffs::CleanAirZoneId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tariffs::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tariffs::TariffClass)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tariffs::BecomeCompliantUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::EmissionsStandardsUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::BoundaryUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::ExemptionOrDiscountUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::HoursOfOperationUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::PayCazUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::PricingUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::MainInfoUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::FinancialAssistanceUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tariffs::BusRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::CarRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::MiniBusRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::CoachRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::HgvRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::LargeVanRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::MopedRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::MotorcycleRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::PhvRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::SmallVanRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::TaxiRate)
                            .string()
                            .not_null()
                            .default("0.00"),
                    )
                    .col(
                        ColumnDef::new(Tariffs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tariffs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tariffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tariffs {
    Table,
    CleanAirZoneId,
    Name,
    TariffClass,
    BecomeCompliantUrl,
    EmissionsStandardsUrl,
    BoundaryUrl,
    ExemptionOrDiscountUrl,
    HoursOfOperationUrl,
    PayCazUrl,
    PricingUrl,
    MainInfoUrl,
    FinancialAssistanceUrl,
    BusRate,
    CarRate,
    MiniBusRate,
    CoachRate,
    HgvRate,
    LargeVanRate,
    MopedRate,
    MotorcycleRate,
    PhvRate,
    SmallVanRate,
    TaxiRate,
    CreatedAt,
    UpdatedAt,
}
