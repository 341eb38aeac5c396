use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Loader::Table)
                    .if_not_exists()
                    .col(pk_auto(Loader::Id))
                    .col(string(Loader::Name))
                    .col(string(Loader::PhoneNumber))
                    .col(string_null(Loader::Email))
                    .col(timestamp(Loader::CreatedAt))
                    .col(timestamp_null(Loader::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Loader::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Loader {
    Table,
    Id,
    Name,
    PhoneNumber,
    Email,
    CreatedAt,
    UpdatedAt,
}
