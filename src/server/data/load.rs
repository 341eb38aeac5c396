use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::load::LoadStatus,
    server::{
        data::store::{LoadStore, Pagination},
        model::db::LoadModel,
    },
};

/// Values for a new load, amounts already converted to liters
pub struct NewLoad {
    pub loader_id: i32,
    pub chemical_id: i32,
    pub mission_id: i32,
    pub load_number: i32,
    pub chemical_amount: f64,
    pub water_amount: f64,
    pub status: LoadStatus,
}

/// Changed fields of a load; `None` leaves the stored value untouched
#[derive(Default)]
pub struct LoadChanges {
    pub load_number: Option<i32>,
    pub chemical_amount: Option<f64>,
    pub water_amount: Option<f64>,
    pub status: Option<LoadStatus>,
}

/// Filters for [`LoadRepository::get_page`]; `None` fields do not filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadCriteria {
    pub mission_id: Option<i32>,
    pub status: Option<LoadStatus>,
    /// Every matching load is returned when unset
    pub pagination: Option<Pagination>,
}

pub struct LoadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoadRepository<'a, C> {
    /// Creates a new instance of [`LoadRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, load: NewLoad) -> Result<LoadModel, DbErr> {
        entity::prelude::Load::insert(entity::load::ActiveModel {
            loader_id: ActiveValue::Set(load.loader_id),
            chemical_id: ActiveValue::Set(load.chemical_id),
            mission_id: ActiveValue::Set(load.mission_id),
            load_number: ActiveValue::Set(load.load_number),
            chemical_amount: ActiveValue::Set(load.chemical_amount),
            water_amount: ActiveValue::Set(load.water_amount),
            status: ActiveValue::Set(load.status.as_str().to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<LoadModel>, DbErr> {
        entity::prelude::Load::find_by_id(id).one(self.db).await
    }

    /// Applies `changes` to an existing load.
    ///
    /// Returns `None` if no load exists with the provided ID.
    pub async fn update(&self, id: i32, changes: LoadChanges) -> Result<Option<LoadModel>, DbErr> {
        let Some(load) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut load: entity::load::ActiveModel = load.into();

        if let Some(load_number) = changes.load_number {
            load.load_number = ActiveValue::Set(load_number);
        }
        if let Some(chemical_amount) = changes.chemical_amount {
            load.chemical_amount = ActiveValue::Set(chemical_amount);
        }
        if let Some(water_amount) = changes.water_amount {
            load.water_amount = ActiveValue::Set(water_amount);
        }
        if let Some(status) = changes.status {
            load.status = ActiveValue::Set(status.as_str().to_string());
        }

        Ok(Some(load.update(self.db).await?))
    }

    /// Deletes a load
    ///
    /// Returns OK regardless of the load existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Load::delete_by_id(id).exec(self.db).await
    }

    /// Loads matching `criteria`, oldest first
    pub async fn get_page(&self, criteria: &LoadCriteria) -> Result<Vec<LoadModel>, DbErr> {
        let mut query = entity::prelude::Load::find();

        if let Some(mission_id) = criteria.mission_id {
            query = query.filter(entity::load::Column::MissionId.eq(mission_id));
        }
        if let Some(status) = criteria.status {
            query = query.filter(entity::load::Column::Status.eq(status.as_str()));
        }

        query = query.order_by_asc(entity::load::Column::Id);

        if let Some(pagination) = criteria.pagination {
            query = query.offset(pagination.offset()).limit(pagination.limit);
        }

        query.all(self.db).await
    }

    /// Loads whose `column` references `id`, such as a chemical's loads
    pub async fn count_referencing(
        &self,
        column: entity::load::Column,
        id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Load::find()
            .filter(column.eq(id))
            .count(self.db)
            .await
    }

    async fn sum_counted(
        &self,
        column: entity::load::Column,
        mission_id: Option<i32>,
    ) -> Result<f64, DbErr> {
        let mut query = entity::prelude::Load::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::sum(Expr::col((entity::load::Entity, column)))),
                "total",
            )
            .filter(
                entity::load::Column::Status
                    .is_in(LoadStatus::COUNTED.iter().map(|status| status.as_str())),
            );

        if let Some(mission_id) = mission_id {
            query = query.filter(entity::load::Column::MissionId.eq(mission_id));
        }

        let total = query
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?
            .flatten();

        Ok(total.unwrap_or(0.0))
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait + Sync> LoadStore for LoadRepository<'a, C> {
    async fn sum_counted_chemical(&self, mission_id: Option<i32>) -> Result<f64, DbErr> {
        self.sum_counted(entity::load::Column::ChemicalAmount, mission_id)
            .await
    }

    async fn sum_counted_water(&self, mission_id: Option<i32>) -> Result<f64, DbErr> {
        self.sum_counted(entity::load::Column::WaterAmount, mission_id)
            .await
    }

    async fn count_where(
        &self,
        status: Option<LoadStatus>,
        mission_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Load::find();

        if let Some(status) = status {
            query = query.filter(entity::load::Column::Status.eq(status.as_str()));
        }
        if let Some(mission_id) = mission_id {
            query = query.filter(entity::load::Column::MissionId.eq(mission_id));
        }

        query.count(self.db).await
    }
}
