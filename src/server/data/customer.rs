use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::db::CustomerModel;

/// Changed fields of a customer; `None` leaves the stored value untouched
#[derive(Default)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    /// `Some(None)` clears the stored email
    pub email: Option<Option<String>>,
}

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        phone_number: String,
        email: Option<String>,
    ) -> Result<CustomerModel, DbErr> {
        entity::prelude::Customer::insert(entity::customer::ActiveModel {
            name: ActiveValue::Set(name),
            phone_number: ActiveValue::Set(phone_number),
            email: ActiveValue::Set(email),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<CustomerModel>, DbErr> {
        entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` if no customer exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: CustomerChanges,
    ) -> Result<Option<CustomerModel>, DbErr> {
        let Some(customer) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut customer: entity::customer::ActiveModel = customer.into();

        if let Some(name) = changes.name {
            customer.name = ActiveValue::Set(name);
        }
        if let Some(phone_number) = changes.phone_number {
            customer.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(email) = changes.email {
            customer.email = ActiveValue::Set(email);
        }

        Ok(Some(customer.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Customer::delete_by_id(id).exec(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }
}
