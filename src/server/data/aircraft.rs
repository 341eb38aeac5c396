use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::AircraftModel;

/// Changed fields of an aircraft; `None` leaves the stored value untouched
#[derive(Default)]
pub struct AircraftChanges {
    pub registration_number: Option<String>,
    pub model: Option<String>,
    pub hopper_capacity_lt: Option<f64>,
}

pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    /// Creates a new instance of [`AircraftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// `hopper_capacity_lt` is the only stored capacity
    pub async fn create(
        &self,
        registration_number: String,
        model: String,
        hopper_capacity_lt: f64,
    ) -> Result<AircraftModel, DbErr> {
        entity::prelude::Aircraft::insert(entity::aircraft::ActiveModel {
            registration_number: ActiveValue::Set(registration_number),
            model: ActiveValue::Set(model),
            hopper_capacity_lt: ActiveValue::Set(hopper_capacity_lt),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find()
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::RegistrationNumber.eq(registration_number))
            .one(self.db)
            .await
    }

    /// Returns the subset of `ids` that exist
    pub async fn get_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Aircraft::find()
            .select_only()
            .column(entity::aircraft::Column::Id)
            .filter(entity::aircraft::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Returns `None` if no aircraft exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: AircraftChanges,
    ) -> Result<Option<AircraftModel>, DbErr> {
        let Some(aircraft) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut aircraft: entity::aircraft::ActiveModel = aircraft.into();

        if let Some(registration_number) = changes.registration_number {
            aircraft.registration_number = ActiveValue::Set(registration_number);
        }
        if let Some(model) = changes.model {
            aircraft.model = ActiveValue::Set(model);
        }
        if let Some(hopper_capacity_lt) = changes.hopper_capacity_lt {
            aircraft.hopper_capacity_lt = ActiveValue::Set(hopper_capacity_lt);
        }

        Ok(Some(aircraft.update(self.db).await?))
    }

    /// Removes the aircraft's mission assignments, then the aircraft.
    ///
    /// Run on a transaction so a failed delete keeps the assignments.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MissionAircraft::delete_many()
            .filter(entity::mission_aircraft::Column::AircraftId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Aircraft::delete_by_id(id).exec(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Aircraft::find().count(self.db).await
    }
}
