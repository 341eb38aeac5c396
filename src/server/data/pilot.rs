use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::db::PilotModel;

/// Changed fields of a pilot; `None` leaves the stored value untouched
#[derive(Default)]
pub struct PilotChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

pub struct PilotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PilotRepository<'a, C> {
    /// Creates a new instance of [`PilotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        phone_number: String,
    ) -> Result<PilotModel, DbErr> {
        entity::prelude::Pilot::insert(entity::pilot::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            phone_number: ActiveValue::Set(phone_number),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PilotModel>, DbErr> {
        entity::prelude::Pilot::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<PilotModel>, DbErr> {
        entity::prelude::Pilot::find()
            .order_by_asc(entity::pilot::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies `changes` to an existing pilot and sets `updated_at` to now.
    ///
    /// Returns `None` if no pilot exists with the provided ID.
    pub async fn update(&self, id: i32, changes: PilotChanges) -> Result<Option<PilotModel>, DbErr> {
        let Some(pilot) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut pilot: entity::pilot::ActiveModel = pilot.into();

        if let Some(name) = changes.name {
            pilot.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            pilot.email = ActiveValue::Set(email);
        }
        if let Some(phone_number) = changes.phone_number {
            pilot.phone_number = ActiveValue::Set(phone_number);
        }
        pilot.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(pilot.update(self.db).await?))
    }

    /// Deletes a pilot
    ///
    /// Returns OK regardless of the pilot existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pilot::delete_by_id(id).exec(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Pilot::find().count(self.db).await
    }
}
