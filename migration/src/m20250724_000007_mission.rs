use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250724_000001_pilot::Pilot, m20250724_000003_customer::Customer,
    m20250724_000005_base::Base,
};

static IDX_MISSION_STATUS: &str = "idx-mission-status";
static IDX_MISSION_PILOT_ID: &str = "idx-mission-pilot_id";
static IDX_MISSION_CUSTOMER_ID: &str = "idx-mission-customer_id";
static IDX_MISSION_SCHEDULED_AT: &str = "idx-mission-scheduled_at";
static FK_MISSION_PILOT_ID: &str = "fk-mission-pilot_id";
static FK_MISSION_CUSTOMER_ID: &str = "fk-mission-customer_id";
static FK_MISSION_BASE_ID: &str = "fk-mission-base_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(integer(Mission::PilotId))
                    .col(integer(Mission::CustomerId))
                    .col(integer(Mission::BaseId))
                    .col(string_null(Mission::Title))
                    .col(string_null(Mission::Type))
                    .col(double(Mission::FieldSizeTotal))
                    .col(double(Mission::FieldSizeSprayable))
                    .col(string_null(Mission::Location))
                    .col(string(Mission::Status))
                    .col(timestamp_null(Mission::ScheduledAt))
                    .col(timestamp(Mission::CreatedAt))
                    .col(timestamp_null(Mission::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_MISSION_STATUS, Mission::Status),
            (IDX_MISSION_PILOT_ID, Mission::PilotId),
            (IDX_MISSION_CUSTOMER_ID, Mission::CustomerId),
            (IDX_MISSION_SCHEDULED_AT, Mission::ScheduledAt),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Mission::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MISSION_PILOT_ID)
                    .from_tbl(Mission::Table)
                    .from_col(Mission::PilotId)
                    .to_tbl(Pilot::Table)
                    .to_col(Pilot::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MISSION_CUSTOMER_ID)
                    .from_tbl(Mission::Table)
                    .from_col(Mission::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MISSION_BASE_ID)
                    .from_tbl(Mission::Table)
                    .from_col(Mission::BaseId)
                    .to_tbl(Base::Table)
                    .to_col(Base::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [FK_MISSION_BASE_ID, FK_MISSION_CUSTOMER_ID, FK_MISSION_PILOT_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Mission::Table)
                        .to_owned(),
                )
                .await?;
        }

        for name in [
            IDX_MISSION_SCHEDULED_AT,
            IDX_MISSION_CUSTOMER_ID,
            IDX_MISSION_PILOT_ID,
            IDX_MISSION_STATUS,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Mission::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mission {
    Table,
    Id,
    PilotId,
    CustomerId,
    BaseId,
    Title,
    Type,
    FieldSizeTotal,
    FieldSizeSprayable,
    Location,
    Status,
    ScheduledAt,
    CreatedAt,
    UpdatedAt,
}
