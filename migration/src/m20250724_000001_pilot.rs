use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pilot::Table)
                    .if_not_exists()
                    .col(pk_auto(Pilot::Id))
                    .col(string(Pilot::Name))
                    .col(string(Pilot::Email))
                    .col(string(Pilot::PhoneNumber))
                    .col(timestamp(Pilot::CreatedAt))
                    .col(timestamp_null(Pilot::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pilot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pilot {
    Table,
    Id,
    Name,
    Email,
    PhoneNumber,
    CreatedAt,
    UpdatedAt,
}
