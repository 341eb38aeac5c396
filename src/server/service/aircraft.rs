use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::catalog::{AircraftDto, CreateAircraftDto, UpdateAircraftDto},
    server::{
        data::aircraft::{AircraftChanges, AircraftRepository},
        error::{validation::ValidationError, Error},
        service::validation::{
            check_length, check_range, AIRCRAFT_MODEL_LENGTH, HOPPER_GALLONS_RANGE,
            HOPPER_LITERS_PER_GALLON, HOPPER_LITERS_RANGE, REGISTRATION_LENGTH,
        },
        util::units::gallons_to_liters,
    },
};

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    /// Creates a new instance of [`AircraftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an aircraft.
    ///
    /// Only the liter capacity is stored. A gallon capacity is converted and takes
    /// precedence; when both are given the liter value must be at least the gallon
    /// value times [`HOPPER_LITERS_PER_GALLON`].
    ///
    /// # Returns
    /// - `Ok(AircraftDto)` - The stored aircraft
    /// - `Err(Error::ValidationError)` - A field broke a rule or the registration is taken
    pub async fn create(&self, dto: CreateAircraftDto) -> Result<AircraftDto, Error> {
        check_length("registrationNumber", &dto.registration_number, REGISTRATION_LENGTH)?;
        check_length("model", &dto.model, AIRCRAFT_MODEL_LENGTH)?;

        let hopper_capacity_lt = hopper_capacity_liters(dto.hopper_capacity_gal, dto.hopper_capacity_lt)?;

        let repository = AircraftRepository::new(self.db);
        let registration_number = dto.registration_number.trim().to_string();

        if repository
            .get_by_registration_number(&registration_number)
            .await?
            .is_some()
        {
            return Err(registration_taken(&registration_number).into());
        }

        // A concurrent insert can still win the unique index after the lookup above
        let aircraft = repository
            .create(
                registration_number.clone(),
                dto.model.trim().to_string(),
                hopper_capacity_lt,
            )
            .await
            .map_err(|err| registration_conflict(err, &registration_number))?;

        Ok(aircraft.into())
    }

    pub async fn get_all(&self) -> Result<Vec<AircraftDto>, Error> {
        let aircraft = AircraftRepository::new(self.db).get_all().await?;

        Ok(aircraft.into_iter().map(AircraftDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<AircraftDto, Error> {
        let aircraft = AircraftRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Aircraft", id))?;

        Ok(aircraft.into())
    }

    /// Applies a partial update.
    ///
    /// When either capacity is given the pair is checked and converted the same way
    /// as on create. A registration number held by another aircraft is rejected.
    pub async fn update(&self, id: i32, dto: UpdateAircraftDto) -> Result<AircraftDto, Error> {
        if let Some(registration_number) = &dto.registration_number {
            check_length("registrationNumber", registration_number, REGISTRATION_LENGTH)?;
        }
        if let Some(model) = &dto.model {
            check_length("model", model, AIRCRAFT_MODEL_LENGTH)?;
        }
        let hopper_capacity_lt = match (dto.hopper_capacity_gal, dto.hopper_capacity_lt) {
            (None, None) => None,
            (gallons, liters) => Some(hopper_capacity_liters(gallons, liters)?),
        };

        let repository = AircraftRepository::new(self.db);
        let registration_number = dto
            .registration_number
            .map(|registration_number| registration_number.trim().to_string());

        if let Some(registration_number) = &registration_number {
            let holder = repository
                .get_by_registration_number(registration_number)
                .await?;
            if holder.is_some_and(|holder| holder.id != id) {
                return Err(registration_taken(registration_number).into());
            }
        }

        let aircraft = repository
            .update(
                id,
                AircraftChanges {
                    registration_number: registration_number.clone(),
                    model: dto.model.map(|model| model.trim().to_string()),
                    hopper_capacity_lt,
                },
            )
            .await
            .map_err(|err| {
                registration_conflict(err, registration_number.as_deref().unwrap_or_default())
            })?
            .ok_or(Error::not_found("Aircraft", id))?;

        Ok(aircraft.into())
    }

    /// Deletes an aircraft and its mission assignments
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        AircraftRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Aircraft", id))?;

        let txn = self.db.begin().await?;
        AircraftRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::debug!(aircraft_id = %id, "Deleted aircraft");

        Ok(())
    }
}

fn registration_taken(registration_number: &str) -> ValidationError {
    ValidationError::Rule(format!(
        "registrationNumber {} is already registered",
        registration_number
    ))
}

/// Maps a unique-index rejection to the same 422 as the up-front duplicate check
fn registration_conflict(err: DbErr, registration_number: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => registration_taken(registration_number).into(),
        _ => err.into(),
    }
}

fn hopper_capacity_liters(gallons: Option<f64>, liters: Option<f64>) -> Result<f64, ValidationError> {
    if let Some(gallons) = gallons {
        check_range("hopperCapacityGal", gallons, HOPPER_GALLONS_RANGE)?;
    }
    if let Some(liters) = liters {
        check_range("hopperCapacityLt", liters, HOPPER_LITERS_RANGE)?;
    }

    match (gallons, liters) {
        (Some(gallons), Some(liters)) => {
            if liters < gallons * HOPPER_LITERS_PER_GALLON {
                return Err(ValidationError::Rule(
                    "hopperCapacityLt does not match hopperCapacityGal".to_string(),
                ));
            }
            Ok(gallons_to_liters(gallons))
        }
        (Some(gallons), None) => Ok(gallons_to_liters(gallons)),
        (None, Some(liters)) => Ok(liters),
        (None, None) => Err(ValidationError::Missing("hopperCapacityGal")),
    }
}
