use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::db::ChemicalModel;

/// Changed fields of a chemical; `None` leaves the stored value untouched
#[derive(Default)]
pub struct ChemicalChanges {
    pub name: Option<String>,
    /// Liters per hectare
    pub application_rate: Option<f64>,
}

pub struct ChemicalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChemicalRepository<'a, C> {
    /// Creates a new instance of [`ChemicalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// `application_rate` is in liters per hectare
    pub async fn create(&self, name: String, application_rate: f64) -> Result<ChemicalModel, DbErr> {
        entity::prelude::Chemical::insert(entity::chemical::ActiveModel {
            name: ActiveValue::Set(name),
            application_rate: ActiveValue::Set(application_rate),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ChemicalModel>, DbErr> {
        entity::prelude::Chemical::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<ChemicalModel>, DbErr> {
        entity::prelude::Chemical::find()
            .order_by_asc(entity::chemical::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` if no chemical exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: ChemicalChanges,
    ) -> Result<Option<ChemicalModel>, DbErr> {
        let Some(chemical) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut chemical: entity::chemical::ActiveModel = chemical.into();

        if let Some(name) = changes.name {
            chemical.name = ActiveValue::Set(name);
        }
        if let Some(application_rate) = changes.application_rate {
            chemical.application_rate = ActiveValue::Set(application_rate);
        }

        Ok(Some(chemical.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Chemical::delete_by_id(id).exec(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Chemical::find().count(self.db).await
    }
}
