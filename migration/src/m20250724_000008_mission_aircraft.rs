use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250724_000006_aircraft::Aircraft, m20250724_000007_mission::Mission};

static IDX_MISSION_AIRCRAFT_MISSION_AIRCRAFT: &str = "idx-mission_aircraft-mission_id-aircraft_id";
static FK_MISSION_AIRCRAFT_MISSION_ID: &str = "fk-mission_aircraft-mission_id";
static FK_MISSION_AIRCRAFT_AIRCRAFT_ID: &str = "fk-mission_aircraft-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionAircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(MissionAircraft::Id))
                    .col(integer(MissionAircraft::MissionId))
                    .col(integer(MissionAircraft::AircraftId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MISSION_AIRCRAFT_MISSION_AIRCRAFT)
                    .table(MissionAircraft::Table)
                    .col(MissionAircraft::MissionId)
                    .col(MissionAircraft::AircraftId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MISSION_AIRCRAFT_MISSION_ID)
                    .from_tbl(MissionAircraft::Table)
                    .from_col(MissionAircraft::MissionId)
                    .to_tbl(Mission::Table)
                    .to_col(Mission::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MISSION_AIRCRAFT_AIRCRAFT_ID)
                    .from_tbl(MissionAircraft::Table)
                    .from_col(MissionAircraft::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_MISSION_AIRCRAFT_AIRCRAFT_ID,
            FK_MISSION_AIRCRAFT_MISSION_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(MissionAircraft::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MISSION_AIRCRAFT_MISSION_AIRCRAFT)
                    .table(MissionAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MissionAircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MissionAircraft {
    Table,
    Id,
    MissionId,
    AircraftId,
}
