use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250724_000002_loader::Loader, m20250724_000004_chemical::Chemical,
    m20250724_000007_mission::Mission,
};

static IDX_LOAD_MISSION_ID: &str = "idx-load-mission_id";
static IDX_LOAD_STATUS: &str = "idx-load-status";
static FK_LOAD_LOADER_ID: &str = "fk-load-loader_id";
static FK_LOAD_CHEMICAL_ID: &str = "fk-load-chemical_id";
static FK_LOAD_MISSION_ID: &str = "fk-load-mission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Amounts are stored in liters only, gallons are derived on read
        manager
            .create_table(
                Table::create()
                    .table(Load::Table)
                    .if_not_exists()
                    .col(pk_auto(Load::Id))
                    .col(integer(Load::LoaderId))
                    .col(integer(Load::ChemicalId))
                    .col(integer(Load::MissionId))
                    .col(integer(Load::LoadNumber))
                    .col(double(Load::ChemicalAmount))
                    .col(double(Load::WaterAmount))
                    .col(string(Load::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOAD_MISSION_ID)
                    .table(Load::Table)
                    .col(Load::MissionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LOAD_STATUS)
                    .table(Load::Table)
                    .col(Load::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOAD_LOADER_ID)
                    .from_tbl(Load::Table)
                    .from_col(Load::LoaderId)
                    .to_tbl(Loader::Table)
                    .to_col(Loader::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOAD_CHEMICAL_ID)
                    .from_tbl(Load::Table)
                    .from_col(Load::ChemicalId)
                    .to_tbl(Chemical::Table)
                    .to_col(Chemical::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOAD_MISSION_ID)
                    .from_tbl(Load::Table)
                    .from_col(Load::MissionId)
                    .to_tbl(Mission::Table)
                    .to_col(Mission::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [FK_LOAD_MISSION_ID, FK_LOAD_CHEMICAL_ID, FK_LOAD_LOADER_ID] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Load::Table).to_owned())
                .await?;
        }

        for name in [IDX_LOAD_STATUS, IDX_LOAD_MISSION_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Load::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Load::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Load {
    Table,
    Id,
    LoaderId,
    ChemicalId,
    MissionId,
    LoadNumber,
    ChemicalAmount,
    WaterAmount,
    Status,
}
