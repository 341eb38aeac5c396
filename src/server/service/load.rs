use sea_orm::DatabaseConnection;

use crate::{
    model::load::{CreateLoadDto, LoadDto, LoadStatus, UpdateLoadDto},
    server::{
        data::{
            chemical::ChemicalRepository,
            load::{LoadChanges, LoadCriteria, LoadRepository, NewLoad},
            loader::LoaderRepository,
            mission::MissionRepository,
        },
        error::{validation::ValidationError, Error},
        service::validation::{
            check_int_range, check_range, CHEMICAL_AMOUNT_RANGE, LOAD_NUMBER_RANGE,
            WATER_AMOUNT_RANGE,
        },
        util::units::gallons_to_liters,
    },
};

pub struct LoadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadService<'a> {
    /// Creates a new instance of [`LoadService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new load.
    ///
    /// Gallon amounts are converted and replace any liter amount given alongside them.
    /// The load starts in `preparing` status unless another status is given.
    pub async fn create(&self, dto: CreateLoadDto) -> Result<LoadDto, Error> {
        check_int_range("loadNumber", dto.load_number, LOAD_NUMBER_RANGE)?;

        let chemical_amount = liters_or_gallons(
            "chemicalAmount",
            dto.chemical_amount,
            dto.chemical_amount_gal,
        )
        .ok_or(ValidationError::Missing("chemicalAmount"))?;
        let water_amount = liters_or_gallons("waterAmount", dto.water_amount, dto.water_amount_gal)
            .ok_or(ValidationError::Missing("waterAmount"))?;

        check_range("chemicalAmount", chemical_amount, CHEMICAL_AMOUNT_RANGE)?;
        check_range("waterAmount", water_amount, WATER_AMOUNT_RANGE)?;

        LoaderRepository::new(self.db)
            .get_by_id(dto.loader_id)
            .await?
            .ok_or(Error::not_found("Loader", dto.loader_id))?;
        ChemicalRepository::new(self.db)
            .get_by_id(dto.chemical_id)
            .await?
            .ok_or(Error::not_found("Chemical", dto.chemical_id))?;
        MissionRepository::new(self.db)
            .get_by_id(dto.mission_id)
            .await?
            .ok_or(Error::not_found("Mission", dto.mission_id))?;

        let load = LoadRepository::new(self.db)
            .create(NewLoad {
                loader_id: dto.loader_id,
                chemical_id: dto.chemical_id,
                mission_id: dto.mission_id,
                load_number: dto.load_number,
                chemical_amount,
                water_amount,
                status: dto.status.unwrap_or(LoadStatus::Preparing),
            })
            .await?;

        tracing::debug!(load_id = %load.id, mission_id = %load.mission_id, "Created load");

        Ok(load.into())
    }

    pub async fn get(&self, id: i32) -> Result<LoadDto, Error> {
        let load = LoadRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Load", id))?;

        Ok(load.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateLoadDto) -> Result<LoadDto, Error> {
        if let Some(load_number) = dto.load_number {
            check_int_range("loadNumber", load_number, LOAD_NUMBER_RANGE)?;
        }

        let chemical_amount =
            liters_or_gallons("chemicalAmount", dto.chemical_amount, dto.chemical_amount_gal);
        let water_amount = liters_or_gallons("waterAmount", dto.water_amount, dto.water_amount_gal);

        if let Some(chemical_amount) = chemical_amount {
            check_range("chemicalAmount", chemical_amount, CHEMICAL_AMOUNT_RANGE)?;
        }
        if let Some(water_amount) = water_amount {
            check_range("waterAmount", water_amount, WATER_AMOUNT_RANGE)?;
        }

        let load = LoadRepository::new(self.db)
            .update(
                id,
                LoadChanges {
                    load_number: dto.load_number,
                    chemical_amount,
                    water_amount,
                    status: dto.status,
                },
            )
            .await?
            .ok_or(Error::not_found("Load", id))?;

        Ok(load.into())
    }

    pub async fn get_all(&self, criteria: &LoadCriteria) -> Result<Vec<LoadDto>, Error> {
        let loads = LoadRepository::new(self.db).get_page(criteria).await?;

        Ok(loads.into_iter().map(LoadDto::from).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = LoadRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found("Load", id));
        }

        Ok(())
    }
}

/// Resolves an amount in liters, preferring the gallon input when present
fn liters_or_gallons(field: &'static str, liters: Option<f64>, gallons: Option<f64>) -> Option<f64> {
    match (liters, gallons) {
        (_, Some(gallons)) => {
            tracing::trace!(field = %field, gallons = %gallons, "Converting gallon input to liters");
            Some(gallons_to_liters(gallons))
        }
        (Some(liters), None) => Some(liters),
        (None, None) => None,
    }
}
