use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func, NullOrdering, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    model::mission::{MissionStatus, MissionType},
    server::{
        data::store::{MissionCriteria, MissionRecord, MissionStore},
        model::db::MissionModel,
    },
};

/// Values for a new mission, field sizes in hectares
pub struct NewMission {
    pub pilot_id: i32,
    pub customer_id: i32,
    pub base_id: i32,
    pub title: Option<String>,
    pub mission_type: Option<MissionType>,
    pub field_size_total: f64,
    pub field_size_sprayable: f64,
    pub location: Option<String>,
    pub status: MissionStatus,
    pub scheduled_at: Option<NaiveDateTime>,
}

/// Changed fields of a mission; `None` leaves the stored value untouched
#[derive(Default)]
pub struct MissionChanges {
    pub pilot_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub base_id: Option<i32>,
    pub title: Option<String>,
    pub mission_type: Option<MissionType>,
    pub field_size_total: Option<f64>,
    pub field_size_sprayable: Option<f64>,
    pub location: Option<String>,
    pub status: Option<MissionStatus>,
    pub scheduled_at: Option<NaiveDateTime>,
}

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new instance of [`MissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a mission with `created_at` set to now
    pub async fn create(&self, mission: NewMission) -> Result<MissionModel, DbErr> {
        entity::prelude::Mission::insert(entity::mission::ActiveModel {
            pilot_id: ActiveValue::Set(mission.pilot_id),
            customer_id: ActiveValue::Set(mission.customer_id),
            base_id: ActiveValue::Set(mission.base_id),
            title: ActiveValue::Set(mission.title),
            mission_type: ActiveValue::Set(
                mission
                    .mission_type
                    .map(|mission_type| mission_type.as_str().to_string()),
            ),
            field_size_total: ActiveValue::Set(mission.field_size_total),
            field_size_sprayable: ActiveValue::Set(mission.field_size_sprayable),
            location: ActiveValue::Set(mission.location),
            status: ActiveValue::Set(mission.status.as_str().to_string()),
            scheduled_at: ActiveValue::Set(mission.scheduled_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MissionModel>, DbErr> {
        entity::prelude::Mission::find_by_id(id).one(self.db).await
    }

    /// Applies `changes` to an existing mission and sets `updated_at` to now.
    ///
    /// Returns `None` if no mission exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: MissionChanges,
    ) -> Result<Option<MissionModel>, DbErr> {
        let Some(mission) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut mission: entity::mission::ActiveModel = mission.into();

        if let Some(pilot_id) = changes.pilot_id {
            mission.pilot_id = ActiveValue::Set(pilot_id);
        }
        if let Some(customer_id) = changes.customer_id {
            mission.customer_id = ActiveValue::Set(customer_id);
        }
        if let Some(base_id) = changes.base_id {
            mission.base_id = ActiveValue::Set(base_id);
        }
        if let Some(title) = changes.title {
            mission.title = ActiveValue::Set(Some(title));
        }
        if let Some(mission_type) = changes.mission_type {
            mission.mission_type = ActiveValue::Set(Some(mission_type.as_str().to_string()));
        }
        if let Some(field_size_total) = changes.field_size_total {
            mission.field_size_total = ActiveValue::Set(field_size_total);
        }
        if let Some(field_size_sprayable) = changes.field_size_sprayable {
            mission.field_size_sprayable = ActiveValue::Set(field_size_sprayable);
        }
        if let Some(location) = changes.location {
            mission.location = ActiveValue::Set(Some(location));
        }
        if let Some(status) = changes.status {
            mission.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(scheduled_at) = changes.scheduled_at {
            mission.scheduled_at = ActiveValue::Set(Some(scheduled_at));
        }
        mission.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(mission.update(self.db).await?))
    }

    /// Removes the mission's aircraft assignments, then the mission.
    ///
    /// Run on a transaction so a failed delete keeps the assignments.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MissionAircraft::delete_many()
            .filter(entity::mission_aircraft::Column::MissionId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Mission::delete_by_id(id).exec(self.db).await
    }

    /// Missions whose `column` references `id`, such as a pilot's missions
    pub async fn count_referencing(
        &self,
        column: entity::mission::Column,
        id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Mission::find()
            .filter(column.eq(id))
            .count(self.db)
            .await
    }

    /// Mission rows matching `criteria` in [`MissionStore::find_page`] order
    pub async fn get_page(&self, criteria: &MissionCriteria) -> Result<Vec<MissionModel>, DbErr> {
        filtered(criteria).all(self.db).await
    }

    /// Aircraft IDs per mission, earliest assignment first
    pub async fn get_aircraft_ids_by_mission(
        &self,
        mission_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        let assignments = entity::prelude::MissionAircraft::find()
            .select_only()
            .column(entity::mission_aircraft::Column::MissionId)
            .column(entity::mission_aircraft::Column::AircraftId)
            .filter(entity::mission_aircraft::Column::MissionId.is_in(mission_ids.iter().copied()))
            .order_by_asc(entity::mission_aircraft::Column::Id)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;

        let mut aircraft_ids: HashMap<i32, Vec<i32>> = HashMap::new();
        for (mission_id, aircraft_id) in assignments {
            aircraft_ids.entry(mission_id).or_default().push(aircraft_id);
        }

        Ok(aircraft_ids)
    }

    /// Appends aircraft assignments in the order given
    pub async fn assign_aircraft(&self, mission_id: i32, aircraft_ids: &[i32]) -> Result<(), DbErr> {
        if aircraft_ids.is_empty() {
            return Ok(());
        }

        let assignments = aircraft_ids
            .iter()
            .map(|aircraft_id| entity::mission_aircraft::ActiveModel {
                mission_id: ActiveValue::Set(mission_id),
                aircraft_id: ActiveValue::Set(*aircraft_id),
                ..Default::default()
            });

        entity::prelude::MissionAircraft::insert_many(assignments)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes every aircraft assignment of the mission and assigns `aircraft_ids`
    pub async fn replace_aircraft(
        &self,
        mission_id: i32,
        aircraft_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::MissionAircraft::delete_many()
            .filter(entity::mission_aircraft::Column::MissionId.eq(mission_id))
            .exec(self.db)
            .await?;

        self.assign_aircraft(mission_id, aircraft_ids).await
    }

    /// Aircraft IDs assigned to the mission, earliest assignment first
    pub async fn get_aircraft_ids(&self, mission_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::MissionAircraft::find()
            .select_only()
            .column(entity::mission_aircraft::Column::AircraftId)
            .filter(entity::mission_aircraft::Column::MissionId.eq(mission_id))
            .order_by_asc(entity::mission_aircraft::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait + Sync> MissionStore for MissionRepository<'a, C> {
    async fn sum_completed_sprayable_area(&self) -> Result<f64, DbErr> {
        let total = entity::prelude::Mission::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::sum(Expr::col((
                    entity::mission::Entity,
                    entity::mission::Column::FieldSizeSprayable,
                )))),
                "total",
            )
            .filter(entity::mission::Column::Status.eq(MissionStatus::Completed.as_str()))
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(total.unwrap_or(0.0))
    }

    async fn average_completed_sprayable_area(&self) -> Result<f64, DbErr> {
        let average = entity::prelude::Mission::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col((
                    entity::mission::Entity,
                    entity::mission::Column::FieldSizeSprayable,
                )))),
                "average",
            )
            .filter(entity::mission::Column::Status.eq(MissionStatus::Completed.as_str()))
            .filter(entity::mission::Column::FieldSizeSprayable.gt(0.0))
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(average.unwrap_or(0.0))
    }

    async fn count_where(&self, status: Option<MissionStatus>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Mission::find();

        if let Some(status) = status {
            query = query.filter(entity::mission::Column::Status.eq(status.as_str()));
        }

        query.count(self.db).await
    }

    async fn find_page(&self, criteria: &MissionCriteria) -> Result<Vec<MissionRecord>, DbErr> {
        let missions = filtered(criteria).all(self.db).await?;
        if missions.is_empty() {
            return Ok(Vec::new());
        }

        let mission_ids: Vec<i32> = missions.iter().map(|m| m.id).collect();
        let pilot_ids: Vec<i32> = missions.iter().map(|m| m.pilot_id).collect();
        let customer_ids: Vec<i32> = missions.iter().map(|m| m.customer_id).collect();

        let pilot_names: HashMap<i32, String> = entity::prelude::Pilot::find()
            .select_only()
            .column(entity::pilot::Column::Id)
            .column(entity::pilot::Column::Name)
            .filter(entity::pilot::Column::Id.is_in(pilot_ids))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let customer_names: HashMap<i32, String> = entity::prelude::Customer::find()
            .select_only()
            .column(entity::customer::Column::Id)
            .column(entity::customer::Column::Name)
            .filter(entity::customer::Column::Id.is_in(customer_ids))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        // Ascending join-row ID, so the first registration seen per mission is the primary one
        let assignments = entity::prelude::MissionAircraft::find()
            .filter(entity::mission_aircraft::Column::MissionId.is_in(mission_ids))
            .order_by_asc(entity::mission_aircraft::Column::Id)
            .find_also_related(entity::prelude::Aircraft)
            .all(self.db)
            .await?;

        let mut primary_aircraft: HashMap<i32, String> = HashMap::new();
        for (assignment, aircraft) in assignments {
            if let Some(aircraft) = aircraft {
                primary_aircraft
                    .entry(assignment.mission_id)
                    .or_insert(aircraft.registration_number);
            }
        }

        missions
            .into_iter()
            .map(|mission| {
                let pilot_name = pilot_names.get(&mission.pilot_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("pilot {} of mission {}", mission.pilot_id, mission.id))
                })?;
                let customer_name = customer_names
                    .get(&mission.customer_id)
                    .cloned()
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "customer {} of mission {}",
                            mission.customer_id, mission.id
                        ))
                    })?;

                Ok(MissionRecord {
                    primary_aircraft: primary_aircraft.get(&mission.id).cloned(),
                    pilot_name,
                    customer_name,
                    mission,
                })
            })
            .collect()
    }
}

/// Applies the filters, ordering and page of `criteria` to a mission query
fn filtered(criteria: &MissionCriteria) -> Select<entity::mission::Entity> {
    let mut query = entity::prelude::Mission::find();

    if let Some(status) = criteria.status {
        query = query.filter(entity::mission::Column::Status.eq(status.as_str()));
    }
    if let Some(pilot_id) = criteria.pilot_id {
        query = query.filter(entity::mission::Column::PilotId.eq(pilot_id));
    }
    if let Some(customer_id) = criteria.customer_id {
        query = query.filter(entity::mission::Column::CustomerId.eq(customer_id));
    }

    query = query
        .order_by_with_nulls(
            entity::mission::Column::ScheduledAt,
            Order::Desc,
            NullOrdering::Last,
        )
        .order_by_asc(entity::mission::Column::Id);

    if let Some(pagination) = criteria.pagination {
        query = query.offset(pagination.offset()).limit(pagination.limit);
    }

    query
}
