//! Operations database insertion utilities.
//!
//! Loads fall back to a shared default loader and chemical, and missions to a
//! shared default base, created on first use.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait, QueryOrder};

use crate::{
    error::TestError,
    fixtures::ops::OpsFixtures,
    model::{
        AircraftModel, BaseModel, ChemicalModel, CustomerModel, LoadModel, LoaderModel,
        MissionAircraftModel, MissionModel, PilotModel,
    },
};

impl<'a> OpsFixtures<'a> {
    /// Insert a pilot with a generated email and phone number.
    ///
    /// # Returns
    /// - `Ok(PilotModel)` - The created pilot record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_pilot(&self, name: &str) -> Result<PilotModel, TestError> {
        Ok(entity::prelude::Pilot::insert(entity::pilot::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            )),
            phone_number: ActiveValue::Set("5550100100".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a customer with a generated phone number.
    pub async fn insert_mock_customer(&self, name: &str) -> Result<CustomerModel, TestError> {
        Ok(
            entity::prelude::Customer::insert(entity::customer::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                phone_number: ActiveValue::Set("5550100200".to_string()),
                email: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an operating base.
    pub async fn insert_mock_base(&self, name: &str) -> Result<BaseModel, TestError> {
        Ok(entity::prelude::Base::insert(entity::base::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set("Airstrip 1".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an aircraft with the hopper capacity given in liters.
    pub async fn insert_mock_aircraft(
        &self,
        registration_number: &str,
        hopper_capacity_lt: f64,
    ) -> Result<AircraftModel, TestError> {
        Ok(
            entity::prelude::Aircraft::insert(entity::aircraft::ActiveModel {
                registration_number: ActiveValue::Set(registration_number.to_string()),
                model: ActiveValue::Set("Air Tractor AT-802".to_string()),
                hopper_capacity_lt: ActiveValue::Set(hopper_capacity_lt),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a chemical product with a 1.5 L/ha application rate.
    pub async fn insert_mock_chemical(&self, name: &str) -> Result<ChemicalModel, TestError> {
        Ok(
            entity::prelude::Chemical::insert(entity::chemical::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                application_rate: ActiveValue::Set(1.5),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a loader with a generated phone number.
    pub async fn insert_mock_loader(&self, name: &str) -> Result<LoaderModel, TestError> {
        Ok(entity::prelude::Loader::insert(entity::loader::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            phone_number: ActiveValue::Set("5550100300".to_string()),
            email: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mission flown by `pilot_id` for `customer_id`.
    ///
    /// The mission is attached to the default base, creating it if no base exists.
    /// The total field size is set 10% above the sprayable area.
    ///
    /// # Arguments
    /// - `pilot_id` - ID of an existing pilot
    /// - `customer_id` - ID of an existing customer
    /// - `status` - Mission status such as `scheduled` or `completed`
    /// - `field_size_sprayable` - Sprayable area in hectares
    /// - `scheduled_at` - Optional scheduled timestamp
    ///
    /// # Returns
    /// - `Ok(MissionModel)` - The created mission record
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. unknown pilot or customer
    pub async fn insert_mock_mission(
        &self,
        pilot_id: i32,
        customer_id: i32,
        status: &str,
        field_size_sprayable: f64,
        scheduled_at: Option<NaiveDateTime>,
    ) -> Result<MissionModel, TestError> {
        let base_id = match entity::prelude::Base::find()
            .order_by_asc(entity::base::Column::Id)
            .one(&self.setup.db)
            .await?
        {
            Some(base) => base.id,
            None => self.insert_mock_base("Main Base").await?.id,
        };

        Ok(
            entity::prelude::Mission::insert(entity::mission::ActiveModel {
                pilot_id: ActiveValue::Set(pilot_id),
                customer_id: ActiveValue::Set(customer_id),
                base_id: ActiveValue::Set(base_id),
                title: ActiveValue::Set(Some("Test Mission".to_string())),
                mission_type: ActiveValue::Set(Some("herbicide".to_string())),
                field_size_total: ActiveValue::Set(field_size_sprayable * 1.1),
                field_size_sprayable: ActiveValue::Set(field_size_sprayable),
                location: ActiveValue::Set(Some("North Field".to_string())),
                status: ActiveValue::Set(status.to_string()),
                scheduled_at: ActiveValue::Set(scheduled_at),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Assign an aircraft to a mission. Assignments are ordered by insertion.
    pub async fn assign_mock_aircraft(
        &self,
        mission_id: i32,
        aircraft_id: i32,
    ) -> Result<MissionAircraftModel, TestError> {
        Ok(
            entity::prelude::MissionAircraft::insert(entity::mission_aircraft::ActiveModel {
                mission_id: ActiveValue::Set(mission_id),
                aircraft_id: ActiveValue::Set(aircraft_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a load for `mission_id` with amounts in liters.
    ///
    /// Uses the default loader and chemical, creating them if none exist. The load
    /// number continues from the number of loads already stored.
    ///
    /// # Returns
    /// - `Ok(LoadModel)` - The created load record
    /// - `Err(TestError::DbErr)` - Lookup or insert failed
    pub async fn insert_mock_load(
        &self,
        mission_id: i32,
        status: &str,
        chemical_amount: f64,
        water_amount: f64,
    ) -> Result<LoadModel, TestError> {
        let loader_id = match entity::prelude::Loader::find()
            .order_by_asc(entity::loader::Column::Id)
            .one(&self.setup.db)
            .await?
        {
            Some(loader) => loader.id,
            None => self.insert_mock_loader("Test Loader").await?.id,
        };

        let chemical_id = match entity::prelude::Chemical::find()
            .order_by_asc(entity::chemical::Column::Id)
            .one(&self.setup.db)
            .await?
        {
            Some(chemical) => chemical.id,
            None => self.insert_mock_chemical("Test Herbicide").await?.id,
        };

        let load_number = entity::prelude::Load::find().count(&self.setup.db).await? as i32 + 1;

        Ok(entity::prelude::Load::insert(entity::load::ActiveModel {
            loader_id: ActiveValue::Set(loader_id),
            chemical_id: ActiveValue::Set(chemical_id),
            mission_id: ActiveValue::Set(mission_id),
            load_number: ActiveValue::Set(load_number),
            chemical_amount: ActiveValue::Set(chemical_amount),
            water_amount: ActiveValue::Set(water_amount),
            status: ActiveValue::Set(status.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
