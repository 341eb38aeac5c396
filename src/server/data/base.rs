use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::BaseModel;

/// Changed fields of a base; `None` leaves the stored value untouched
#[derive(Default)]
pub struct BaseChanges {
    pub name: Option<String>,
    pub location: Option<String>,
}

pub struct BaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BaseRepository<'a, C> {
    /// Creates a new instance of [`BaseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, location: String) -> Result<BaseModel, DbErr> {
        entity::prelude::Base::insert(entity::base::ActiveModel {
            name: ActiveValue::Set(name),
            location: ActiveValue::Set(location),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BaseModel>, DbErr> {
        entity::prelude::Base::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<BaseModel>, DbErr> {
        entity::prelude::Base::find()
            .order_by_asc(entity::base::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` if no base exists with the provided ID.
    pub async fn update(&self, id: i32, changes: BaseChanges) -> Result<Option<BaseModel>, DbErr> {
        let Some(base) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut base: entity::base::ActiveModel = base.into();

        if let Some(name) = changes.name {
            base.name = ActiveValue::Set(name);
        }
        if let Some(location) = changes.location {
            base.location = ActiveValue::Set(location);
        }

        Ok(Some(base.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Base::delete_by_id(id).exec(self.db).await
    }
}
