use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Hopper capacity is stored in liters only, gallons are derived on read
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(Aircraft::Id))
                    .col(string_uniq(Aircraft::RegistrationNumber))
                    .col(string(Aircraft::Model))
                    .col(double(Aircraft::HopperCapacityLt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    RegistrationNumber,
    Model,
    HopperCapacityLt,
}
