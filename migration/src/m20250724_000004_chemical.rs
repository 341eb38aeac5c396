use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chemical::Table)
                    .if_not_exists()
                    .col(pk_auto(Chemical::Id))
                    .col(string(Chemical::Name))
                    .col(double(Chemical::ApplicationRate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chemical::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chemical {
    Table,
    Id,
    Name,
    ApplicationRate,
}
