use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::db::LoaderModel;

/// Changed fields of a loader; `None` leaves the stored value untouched
#[derive(Default)]
pub struct LoaderChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    /// `Some(None)` clears the stored email
    pub email: Option<Option<String>>,
}

pub struct LoaderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoaderRepository<'a, C> {
    /// Creates a new instance of [`LoaderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        phone_number: String,
        email: Option<String>,
    ) -> Result<LoaderModel, DbErr> {
        entity::prelude::Loader::insert(entity::loader::ActiveModel {
            name: ActiveValue::Set(name),
            phone_number: ActiveValue::Set(phone_number),
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<LoaderModel>, DbErr> {
        entity::prelude::Loader::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<LoaderModel>, DbErr> {
        entity::prelude::Loader::find()
            .order_by_asc(entity::loader::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies `changes` to an existing loader and sets `updated_at` to now.
    ///
    /// Returns `None` if no loader exists with the provided ID.
    pub async fn update(&self, id: i32, changes: LoaderChanges) -> Result<Option<LoaderModel>, DbErr> {
        let Some(loader) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut loader: entity::loader::ActiveModel = loader.into();

        if let Some(name) = changes.name {
            loader.name = ActiveValue::Set(name);
        }
        if let Some(phone_number) = changes.phone_number {
            loader.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(email) = changes.email {
            loader.email = ActiveValue::Set(email);
        }
        loader.updated_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(loader.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Loader::delete_by_id(id).exec(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Loader::find().count(self.db).await
    }
}
