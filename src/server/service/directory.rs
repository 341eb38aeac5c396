//! CRUD for the reference records missions and loads point at.
//!
//! A record still referenced by a mission or load cannot be deleted.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        catalog::{
            BaseDto, ChemicalDto, CreateBaseDto, CreateChemicalDto, CreateCustomerDto, CustomerDto,
            UpdateBaseDto, UpdateChemicalDto, UpdateCustomerDto,
        },
        personnel::{
            CreateLoaderDto, CreatePilotDto, LoaderDto, PilotDto, UpdateLoaderDto, UpdatePilotDto,
        },
    },
    server::{
        data::{
            base::{BaseChanges, BaseRepository},
            chemical::{ChemicalChanges, ChemicalRepository},
            customer::{CustomerChanges, CustomerRepository},
            load::LoadRepository,
            loader::{LoaderChanges, LoaderRepository},
            mission::MissionRepository,
            pilot::{PilotChanges, PilotRepository},
        },
        error::{validation::ValidationError, Error},
        service::validation::{
            check_email, check_length, check_range, check_unreferenced, APPLICATION_RATE_RANGE,
            NAME_LENGTH, PHONE_LENGTH, TEXT_LENGTH,
        },
    },
};

pub struct DirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryService<'a> {
    /// Creates a new instance of [`DirectoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_pilot(&self, dto: CreatePilotDto) -> Result<PilotDto, Error> {
        check_contact(&dto.name, &dto.phone_number, Some(&dto.email))?;

        let pilot = PilotRepository::new(self.db)
            .create(
                dto.name.trim().to_string(),
                dto.email.trim().to_string(),
                dto.phone_number.trim().to_string(),
            )
            .await?;

        Ok(pilot.into())
    }

    pub async fn get_pilots(&self) -> Result<Vec<PilotDto>, Error> {
        let pilots = PilotRepository::new(self.db).get_all().await?;

        Ok(pilots.into_iter().map(PilotDto::from).collect())
    }

    pub async fn get_pilot(&self, id: i32) -> Result<PilotDto, Error> {
        let pilot = PilotRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Pilot", id))?;

        Ok(pilot.into())
    }

    pub async fn update_pilot(&self, id: i32, dto: UpdatePilotDto) -> Result<PilotDto, Error> {
        if let Some(name) = &dto.name {
            check_length("name", name, NAME_LENGTH)?;
        }
        if let Some(email) = &dto.email {
            check_email("email", email)?;
        }
        if let Some(phone_number) = &dto.phone_number {
            check_length("phoneNumber", phone_number, PHONE_LENGTH)?;
        }

        let pilot = PilotRepository::new(self.db)
            .update(
                id,
                PilotChanges {
                    name: dto.name.map(|name| name.trim().to_string()),
                    email: dto.email.map(|email| email.trim().to_string()),
                    phone_number: dto.phone_number.map(|phone| phone.trim().to_string()),
                },
            )
            .await?
            .ok_or(Error::not_found("Pilot", id))?;

        Ok(pilot.into())
    }

    /// # Returns
    /// - `Ok(())` - The pilot was deleted
    /// - `Err(Error::NotFound)` - No pilot exists with the provided ID
    /// - `Err(Error::ValidationError)` - The pilot still flies at least one mission
    pub async fn delete_pilot(&self, id: i32) -> Result<(), Error> {
        let repository = PilotRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Pilot", id))?;

        let missions = MissionRepository::new(self.db)
            .count_referencing(entity::mission::Column::PilotId, id)
            .await?;
        check_unreferenced("Pilot", id, missions, "missions")?;

        repository.delete(id).await?;

        Ok(())
    }

    pub async fn create_loader(&self, dto: CreateLoaderDto) -> Result<LoaderDto, Error> {
        check_contact(&dto.name, &dto.phone_number, dto.email.as_deref())?;

        let loader = LoaderRepository::new(self.db)
            .create(
                dto.name.trim().to_string(),
                dto.phone_number.trim().to_string(),
                trimmed(dto.email),
            )
            .await?;

        Ok(loader.into())
    }

    pub async fn get_loaders(&self) -> Result<Vec<LoaderDto>, Error> {
        let loaders = LoaderRepository::new(self.db).get_all().await?;

        Ok(loaders.into_iter().map(LoaderDto::from).collect())
    }

    pub async fn get_loader(&self, id: i32) -> Result<LoaderDto, Error> {
        let loader = LoaderRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Loader", id))?;

        Ok(loader.into())
    }

    pub async fn update_loader(&self, id: i32, dto: UpdateLoaderDto) -> Result<LoaderDto, Error> {
        check_partial_contact(dto.name.as_deref(), dto.phone_number.as_deref(), dto.email.as_deref())?;

        let loader = LoaderRepository::new(self.db)
            .update(
                id,
                LoaderChanges {
                    name: dto.name.map(|name| name.trim().to_string()),
                    phone_number: dto.phone_number.map(|phone| phone.trim().to_string()),
                    email: dto.email.map(|email| trimmed(Some(email))),
                },
            )
            .await?
            .ok_or(Error::not_found("Loader", id))?;

        Ok(loader.into())
    }

    pub async fn delete_loader(&self, id: i32) -> Result<(), Error> {
        let repository = LoaderRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Loader", id))?;

        let loads = LoadRepository::new(self.db)
            .count_referencing(entity::load::Column::LoaderId, id)
            .await?;
        check_unreferenced("Loader", id, loads, "loads")?;

        repository.delete(id).await?;

        Ok(())
    }

    pub async fn create_customer(&self, dto: CreateCustomerDto) -> Result<CustomerDto, Error> {
        check_contact(&dto.name, &dto.phone_number, dto.email.as_deref())?;

        let customer = CustomerRepository::new(self.db)
            .create(
                dto.name.trim().to_string(),
                dto.phone_number.trim().to_string(),
                trimmed(dto.email),
            )
            .await?;

        Ok(customer.into())
    }

    pub async fn get_customers(&self) -> Result<Vec<CustomerDto>, Error> {
        let customers = CustomerRepository::new(self.db).get_all().await?;

        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    pub async fn get_customer(&self, id: i32) -> Result<CustomerDto, Error> {
        let customer = CustomerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Customer", id))?;

        Ok(customer.into())
    }

    pub async fn update_customer(
        &self,
        id: i32,
        dto: UpdateCustomerDto,
    ) -> Result<CustomerDto, Error> {
        check_partial_contact(dto.name.as_deref(), dto.phone_number.as_deref(), dto.email.as_deref())?;

        let customer = CustomerRepository::new(self.db)
            .update(
                id,
                CustomerChanges {
                    name: dto.name.map(|name| name.trim().to_string()),
                    phone_number: dto.phone_number.map(|phone| phone.trim().to_string()),
                    email: dto.email.map(|email| trimmed(Some(email))),
                },
            )
            .await?
            .ok_or(Error::not_found("Customer", id))?;

        Ok(customer.into())
    }

    pub async fn delete_customer(&self, id: i32) -> Result<(), Error> {
        let repository = CustomerRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Customer", id))?;

        let missions = MissionRepository::new(self.db)
            .count_referencing(entity::mission::Column::CustomerId, id)
            .await?;
        check_unreferenced("Customer", id, missions, "missions")?;

        repository.delete(id).await?;

        Ok(())
    }

    pub async fn create_chemical(&self, dto: CreateChemicalDto) -> Result<ChemicalDto, Error> {
        check_length("name", &dto.name, NAME_LENGTH)?;
        check_range("applicationRate", dto.application_rate, APPLICATION_RATE_RANGE)?;

        let chemical = ChemicalRepository::new(self.db)
            .create(dto.name.trim().to_string(), dto.application_rate)
            .await?;

        Ok(chemical.into())
    }

    pub async fn get_chemicals(&self) -> Result<Vec<ChemicalDto>, Error> {
        let chemicals = ChemicalRepository::new(self.db).get_all().await?;

        Ok(chemicals.into_iter().map(ChemicalDto::from).collect())
    }

    pub async fn get_chemical(&self, id: i32) -> Result<ChemicalDto, Error> {
        let chemical = ChemicalRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Chemical", id))?;

        Ok(chemical.into())
    }

    pub async fn update_chemical(
        &self,
        id: i32,
        dto: UpdateChemicalDto,
    ) -> Result<ChemicalDto, Error> {
        if let Some(name) = &dto.name {
            check_length("name", name, NAME_LENGTH)?;
        }
        if let Some(application_rate) = dto.application_rate {
            check_range("applicationRate", application_rate, APPLICATION_RATE_RANGE)?;
        }

        let chemical = ChemicalRepository::new(self.db)
            .update(
                id,
                ChemicalChanges {
                    name: dto.name.map(|name| name.trim().to_string()),
                    application_rate: dto.application_rate,
                },
            )
            .await?
            .ok_or(Error::not_found("Chemical", id))?;

        Ok(chemical.into())
    }

    pub async fn delete_chemical(&self, id: i32) -> Result<(), Error> {
        let repository = ChemicalRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Chemical", id))?;

        let loads = LoadRepository::new(self.db)
            .count_referencing(entity::load::Column::ChemicalId, id)
            .await?;
        check_unreferenced("Chemical", id, loads, "loads")?;

        repository.delete(id).await?;

        Ok(())
    }

    pub async fn create_base(&self, dto: CreateBaseDto) -> Result<BaseDto, Error> {
        check_length("name", &dto.name, NAME_LENGTH)?;
        check_length("location", &dto.location, TEXT_LENGTH)?;

        let base = BaseRepository::new(self.db)
            .create(dto.name.trim().to_string(), dto.location.trim().to_string())
            .await?;

        Ok(base.into())
    }

    pub async fn get_bases(&self) -> Result<Vec<BaseDto>, Error> {
        let bases = BaseRepository::new(self.db).get_all().await?;

        Ok(bases.into_iter().map(BaseDto::from).collect())
    }

    pub async fn get_base(&self, id: i32) -> Result<BaseDto, Error> {
        let base = BaseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Base", id))?;

        Ok(base.into())
    }

    pub async fn update_base(&self, id: i32, dto: UpdateBaseDto) -> Result<BaseDto, Error> {
        if let Some(name) = &dto.name {
            check_length("name", name, NAME_LENGTH)?;
        }
        if let Some(location) = &dto.location {
            check_length("location", location, TEXT_LENGTH)?;
        }

        let base = BaseRepository::new(self.db)
            .update(
                id,
                BaseChanges {
                    name: dto.name.map(|name| name.trim().to_string()),
                    location: dto.location.map(|location| location.trim().to_string()),
                },
            )
            .await?
            .ok_or(Error::not_found("Base", id))?;

        Ok(base.into())
    }

    pub async fn delete_base(&self, id: i32) -> Result<(), Error> {
        let repository = BaseRepository::new(self.db);
        repository
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Base", id))?;

        let missions = MissionRepository::new(self.db)
            .count_referencing(entity::mission::Column::BaseId, id)
            .await?;
        check_unreferenced("Base", id, missions, "missions")?;

        repository.delete(id).await?;

        Ok(())
    }
}

fn check_contact(name: &str, phone_number: &str, email: Option<&str>) -> Result<(), ValidationError> {
    check_length("name", name, NAME_LENGTH)?;
    check_length("phoneNumber", phone_number, PHONE_LENGTH)?;
    if let Some(email) = email.filter(|email| !email.trim().is_empty()) {
        check_email("email", email)?;
    }

    Ok(())
}

/// Checks only the contact fields present in a partial update
fn check_partial_contact(
    name: Option<&str>,
    phone_number: Option<&str>,
    email: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        check_length("name", name, NAME_LENGTH)?;
    }
    if let Some(phone_number) = phone_number {
        check_length("phoneNumber", phone_number, PHONE_LENGTH)?;
    }
    if let Some(email) = email.filter(|email| !email.trim().is_empty()) {
        check_email("email", email)?;
    }

    Ok(())
}

/// Blank optional strings are stored as `None`
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
