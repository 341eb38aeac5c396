use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::mission::{CreateMissionDto, MissionDto, MissionStatus, UpdateMissionDto},
    server::{
        data::{
            aircraft::AircraftRepository,
            base::BaseRepository,
            customer::CustomerRepository,
            load::LoadRepository,
            mission::{MissionChanges, MissionRepository, NewMission},
            pilot::PilotRepository,
            store::MissionCriteria,
        },
        error::{validation::ValidationError, Error},
        service::{
            display::mission_dto,
            validation::{
                check_length, check_range, check_scheduled_after, check_unreferenced,
                FIELD_SIZE_RANGE, TEXT_LENGTH,
            },
        },
    },
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    /// Creates a new instance of [`MissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new mission with its aircraft assignments.
    ///
    /// The mission starts in `planned` status unless another status is given.
    ///
    /// # Returns
    /// - `Ok(MissionDto)` - The stored mission
    /// - `Err(Error::ValidationError)` - A field broke a write-time rule
    /// - `Err(Error::NotFound)` - A referenced pilot, customer, base or aircraft is missing
    pub async fn create(&self, dto: CreateMissionDto) -> Result<MissionDto, Error> {
        self.create_on(dto, Utc::now().date_naive()).await
    }

    async fn create_on(&self, dto: CreateMissionDto, today: NaiveDate) -> Result<MissionDto, Error> {
        check_field_sizes(dto.field_size_total, dto.field_size_sprayable)?;
        check_optional_text("title", dto.title.as_deref())?;
        check_optional_text("location", dto.location.as_deref())?;
        if let Some(scheduled_at) = dto.scheduled_at {
            check_scheduled_after(scheduled_at, today)?;
        }
        let aircraft_ids = distinct_aircraft(&dto.aircraft_ids)?;

        self.check_pilot(dto.pilot_id).await?;
        self.check_customer(dto.customer_id).await?;
        self.check_base(dto.base_id).await?;
        self.check_aircraft(&aircraft_ids).await?;

        let txn = self.db.begin().await?;
        let repository = MissionRepository::new(&txn);

        let mission = repository
            .create(NewMission {
                pilot_id: dto.pilot_id,
                customer_id: dto.customer_id,
                base_id: dto.base_id,
                title: dto.title.map(|title| title.trim().to_string()),
                mission_type: dto.mission_type,
                field_size_total: dto.field_size_total,
                field_size_sprayable: dto.field_size_sprayable,
                location: dto.location.map(|location| location.trim().to_string()),
                status: dto.status.unwrap_or(MissionStatus::Planned),
                scheduled_at: dto.scheduled_at,
            })
            .await?;
        repository.assign_aircraft(mission.id, &aircraft_ids).await?;

        txn.commit().await?;

        tracing::debug!(mission_id = %mission.id, "Created mission");

        Ok(mission_dto(mission, aircraft_ids))
    }

    pub async fn get(&self, id: i32) -> Result<MissionDto, Error> {
        let repository = MissionRepository::new(self.db);

        let mission = repository
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Mission", id))?;
        let aircraft_ids = repository.get_aircraft_ids(id).await?;

        Ok(mission_dto(mission, aircraft_ids))
    }

    /// Missions matching `criteria` with their aircraft, in summary order
    pub async fn get_all(&self, criteria: &MissionCriteria) -> Result<Vec<MissionDto>, Error> {
        let repository = MissionRepository::new(self.db);

        let missions = repository.get_page(criteria).await?;
        let mission_ids: Vec<i32> = missions.iter().map(|mission| mission.id).collect();
        let mut aircraft_ids = repository
            .get_aircraft_ids_by_mission(&mission_ids)
            .await?;

        Ok(missions
            .into_iter()
            .map(|mission| {
                let assigned = aircraft_ids.remove(&mission.id).unwrap_or_default();
                mission_dto(mission, assigned)
            })
            .collect())
    }

    /// Deletes a mission and its aircraft assignments.
    ///
    /// # Returns
    /// - `Ok(())` - The mission was deleted
    /// - `Err(Error::NotFound)` - No mission exists with the provided ID
    /// - `Err(Error::ValidationError)` - Loads still belong to the mission
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        MissionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Mission", id))?;

        let loads = LoadRepository::new(self.db)
            .count_referencing(entity::load::Column::MissionId, id)
            .await?;
        check_unreferenced("Mission", id, loads, "loads")?;

        let txn = self.db.begin().await?;
        MissionRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::debug!(mission_id = %id, "Deleted mission");

        Ok(())
    }

    /// Applies a partial update. Field-size rules are checked against the merged
    /// values so a lone `fieldSizeSprayable` cannot exceed the stored total.
    pub async fn update(&self, id: i32, dto: UpdateMissionDto) -> Result<MissionDto, Error> {
        let existing = MissionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Mission", id))?;

        check_field_sizes(
            dto.field_size_total.unwrap_or(existing.field_size_total),
            dto.field_size_sprayable
                .unwrap_or(existing.field_size_sprayable),
        )?;
        check_optional_text("title", dto.title.as_deref())?;
        check_optional_text("location", dto.location.as_deref())?;
        if let Some(scheduled_at) = dto.scheduled_at {
            check_scheduled_after(scheduled_at, Utc::now().date_naive())?;
        }
        let aircraft_ids = match &dto.aircraft_ids {
            Some(ids) => Some(distinct_aircraft(ids)?),
            None => None,
        };

        if let Some(pilot_id) = dto.pilot_id {
            self.check_pilot(pilot_id).await?;
        }
        if let Some(customer_id) = dto.customer_id {
            self.check_customer(customer_id).await?;
        }
        if let Some(base_id) = dto.base_id {
            self.check_base(base_id).await?;
        }
        if let Some(aircraft_ids) = &aircraft_ids {
            self.check_aircraft(aircraft_ids).await?;
        }

        let txn = self.db.begin().await?;
        let repository = MissionRepository::new(&txn);

        let mission = repository
            .update(
                id,
                MissionChanges {
                    pilot_id: dto.pilot_id,
                    customer_id: dto.customer_id,
                    base_id: dto.base_id,
                    title: dto.title.map(|title| title.trim().to_string()),
                    mission_type: dto.mission_type,
                    field_size_total: dto.field_size_total,
                    field_size_sprayable: dto.field_size_sprayable,
                    location: dto.location.map(|location| location.trim().to_string()),
                    status: dto.status,
                    scheduled_at: dto.scheduled_at,
                },
            )
            .await?
            .ok_or(Error::not_found("Mission", id))?;

        if let Some(aircraft_ids) = &aircraft_ids {
            repository.replace_aircraft(id, aircraft_ids).await?;
        }
        let aircraft_ids = repository.get_aircraft_ids(id).await?;

        txn.commit().await?;

        Ok(mission_dto(mission, aircraft_ids))
    }

    async fn check_pilot(&self, id: i32) -> Result<(), Error> {
        PilotRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Pilot", id))?;

        Ok(())
    }

    async fn check_customer(&self, id: i32) -> Result<(), Error> {
        CustomerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Customer", id))?;

        Ok(())
    }

    async fn check_base(&self, id: i32) -> Result<(), Error> {
        BaseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Base", id))?;

        Ok(())
    }

    async fn check_aircraft(&self, ids: &[i32]) -> Result<(), Error> {
        let existing = AircraftRepository::new(self.db)
            .get_existing_ids(ids)
            .await?;

        match ids.iter().find(|id| !existing.contains(id)) {
            Some(missing) => Err(Error::not_found("Aircraft", *missing)),
            None => Ok(()),
        }
    }
}

fn check_field_sizes(total: f64, sprayable: f64) -> Result<(), ValidationError> {
    check_range("fieldSizeTotal", total, FIELD_SIZE_RANGE)?;
    check_range("fieldSizeSprayable", sprayable, FIELD_SIZE_RANGE)?;

    if sprayable > total {
        return Err(ValidationError::Rule(
            "fieldSizeSprayable cannot exceed fieldSizeTotal".to_string(),
        ));
    }

    Ok(())
}

fn check_optional_text(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(value) => check_length(field, value, TEXT_LENGTH),
        None => Ok(()),
    }
}

/// At least one aircraft, duplicates dropped keeping first occurrence
fn distinct_aircraft(ids: &[i32]) -> Result<Vec<i32>, ValidationError> {
    let mut distinct = Vec::with_capacity(ids.len());
    for id in ids {
        if !distinct.contains(id) {
            distinct.push(*id);
        }
    }

    if distinct.is_empty() {
        return Err(ValidationError::Missing("aircraftIds"));
    }

    Ok(distinct)
}

#[cfg(test)]
mod tests {
    use agrispray_test_utils::prelude::*;
    use chrono::NaiveDate;

    use super::*;
    use crate::model::mission::MissionType;

    struct Refs {
        pilot_id: i32,
        customer_id: i32,
        base_id: i32,
        aircraft_ids: Vec<i32>,
    }

    async fn setup(test: &mut TestContext) -> Result<Refs, TestError> {
        let pilot = test.ops().insert_mock_pilot("Jane Doe").await?;
        let customer = test.ops().insert_mock_customer("Acme Farms").await?;
        let base = test.ops().insert_mock_base("Main Base").await?;
        let first = test.ops().insert_mock_aircraft("N802AB", 3028.0).await?;
        let second = test.ops().insert_mock_aircraft("N502CD", 1893.0).await?;

        Ok(Refs {
            pilot_id: pilot.id,
            customer_id: customer.id,
            base_id: base.id,
            aircraft_ids: vec![second.id, first.id],
        })
    }

    fn create_dto(refs: &Refs) -> CreateMissionDto {
        CreateMissionDto {
            pilot_id: refs.pilot_id,
            customer_id: refs.customer_id,
            base_id: refs.base_id,
            aircraft_ids: refs.aircraft_ids.clone(),
            title: Some("North field herbicide".to_string()),
            mission_type: Some(MissionType::Herbicide),
            field_size_total: 150.0,
            field_size_sprayable: 145.0,
            location: Some("North Field".to_string()),
            status: None,
            scheduled_at: None,
        }
    }

    /// Expect a new mission to start planned with aircraft in the given order
    #[tokio::test]
    async fn test_create_mission_defaults() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);

        let mission = service.create(create_dto(&refs)).await.unwrap();

        assert_eq!(mission.status, "planned");
        assert_eq!(mission.mission_type.as_deref(), Some("herbicide"));
        assert_eq!(mission.aircraft_ids, refs.aircraft_ids);
        assert!(mission.updated_at.is_none());

        Ok(())
    }

    /// Expect sprayable area above the total to be rejected
    #[tokio::test]
    async fn test_create_mission_sprayable_exceeds_total() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);

        let mut dto = create_dto(&refs);
        dto.field_size_sprayable = 151.0;

        let result = service.create(dto).await;

        assert!(matches!(result, Err(Error::ValidationError(ValidationError::Rule(_)))));

        Ok(())
    }

    /// Expect a mission without aircraft to be rejected
    #[tokio::test]
    async fn test_create_mission_requires_aircraft() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);

        let mut dto = create_dto(&refs);
        dto.aircraft_ids = Vec::new();

        let result = service.create(dto).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::Missing("aircraftIds")))
        ));

        Ok(())
    }

    /// Expect NotFound for an unknown aircraft ID
    #[tokio::test]
    async fn test_create_mission_unknown_aircraft() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);

        let mut dto = create_dto(&refs);
        dto.aircraft_ids.push(999);

        let result = service.create(dto).await;

        assert!(matches!(
            result,
            Err(Error::NotFound {
                resource: "Aircraft",
                id: 999
            })
        ));

        Ok(())
    }

    /// Expect scheduled_at before the current date to be rejected
    #[tokio::test]
    async fn test_create_mission_scheduled_in_past() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);
        let today = NaiveDate::from_ymd_opt(2025, 7, 24).unwrap();

        let mut dto = create_dto(&refs);
        dto.scheduled_at = NaiveDate::from_ymd_opt(2025, 7, 20).and_then(|d| d.and_hms_opt(8, 0, 0));

        let result = service.create_on(dto, today).await;

        assert!(matches!(result, Err(Error::ValidationError(_))));

        Ok(())
    }

    /// Expect partial update to validate against stored field sizes and replace aircraft
    #[tokio::test]
    async fn test_update_mission() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);
        let mission = service.create(create_dto(&refs)).await.unwrap();

        let rejected = service
            .update(
                mission.id,
                UpdateMissionDto {
                    field_size_sprayable: Some(200.0),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(rejected, Err(Error::ValidationError(_))));

        let updated = service
            .update(
                mission.id,
                UpdateMissionDto {
                    status: Some(MissionStatus::Completed),
                    aircraft_ids: Some(vec![refs.aircraft_ids[1]]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "completed");
        assert_eq!(updated.aircraft_ids, vec![refs.aircraft_ids[1]]);
        assert_eq!(updated.field_size_sprayable, 145.0);
        assert!(updated.updated_at.is_some());

        Ok(())
    }

    /// Expect NotFound when reading a missing mission
    #[tokio::test]
    async fn test_get_mission_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_operations_tables().build().await?;
        let service = MissionService::new(&test.db);

        let result = service.get(42).await;

        assert!(matches!(result, Err(Error::NotFound { resource: "Mission", id: 42 })));

        Ok(())
    }

    /// Expect listed missions to carry their own aircraft
    #[tokio::test]
    async fn test_get_all_missions() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);
        let mission = service.create(create_dto(&refs)).await.unwrap();

        let missions = service.get_all(&MissionCriteria::default()).await.unwrap();

        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].id, mission.id);
        assert_eq!(missions[0].aircraft_ids, mission.aircraft_ids);

        Ok(())
    }

    /// Expect a mission with loads to be kept and an empty one to be deleted
    #[tokio::test]
    async fn test_delete_mission() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_operations_tables().build().await?;
        let refs = setup(&mut test).await?;
        let service = MissionService::new(&test.db);
        let busy = service.create(create_dto(&refs)).await.unwrap();
        let idle = service.create(create_dto(&refs)).await.unwrap();
        test.ops()
            .insert_mock_load(busy.id, "preparing", 10.0, 100.0)
            .await?;
        let service = MissionService::new(&test.db);

        assert!(matches!(
            service.delete(busy.id).await,
            Err(Error::ValidationError(ValidationError::Rule(_)))
        ));

        service.delete(idle.id).await.unwrap();

        assert!(matches!(
            service.get(idle.id).await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            service.delete(idle.id).await,
            Err(Error::NotFound { .. })
        ));

        Ok(())
    }
}
