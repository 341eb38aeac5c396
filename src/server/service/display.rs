//! Database model to response DTO conversions.
//!
//! Imperial and display fields are derived here from the stored metric values;
//! nothing imperial is ever persisted.

use crate::{
    model::{
        catalog::{AircraftDto, BaseDto, ChemicalDto, CustomerDto},
        load::LoadDto,
        mission::MissionDto,
        personnel::{LoaderDto, PilotDto},
    },
    server::{
        model::db::{
            AircraftModel, BaseModel, ChemicalModel, CustomerModel, LoadModel, LoaderModel,
            MissionModel, PilotModel,
        },
        util::units::{format_area, format_volume, liters_to_gallons},
    },
};

/// Builds the mission detail DTO, `aircraft_ids` in assignment order
pub fn mission_dto(mission: MissionModel, aircraft_ids: Vec<i32>) -> MissionDto {
    MissionDto {
        id: mission.id,
        pilot_id: mission.pilot_id,
        customer_id: mission.customer_id,
        base_id: mission.base_id,
        aircraft_ids,
        title: mission.title,
        mission_type: mission.mission_type,
        field_size_total_display: format_area(mission.field_size_total, true),
        field_size_total: mission.field_size_total,
        field_size_sprayable_display: format_area(mission.field_size_sprayable, true),
        field_size_sprayable: mission.field_size_sprayable,
        location: mission.location,
        status: mission.status,
        scheduled_at: mission.scheduled_at,
        created_at: mission.created_at,
        updated_at: mission.updated_at,
    }
}

impl From<LoadModel> for LoadDto {
    fn from(load: LoadModel) -> Self {
        Self {
            id: load.id,
            loader_id: load.loader_id,
            chemical_id: load.chemical_id,
            mission_id: load.mission_id,
            load_number: load.load_number,
            chemical_amount: load.chemical_amount,
            chemical_amount_gal: liters_to_gallons(load.chemical_amount),
            chemical_amount_display: format_volume(load.chemical_amount, true),
            water_amount: load.water_amount,
            water_amount_gal: liters_to_gallons(load.water_amount),
            water_amount_display: format_volume(load.water_amount, true),
            status: load.status,
        }
    }
}

impl From<AircraftModel> for AircraftDto {
    fn from(aircraft: AircraftModel) -> Self {
        Self {
            id: aircraft.id,
            registration_number: aircraft.registration_number,
            model: aircraft.model,
            hopper_capacity_lt: aircraft.hopper_capacity_lt,
            hopper_capacity_gal: liters_to_gallons(aircraft.hopper_capacity_lt),
            hopper_capacity_display: format_volume(aircraft.hopper_capacity_lt, true),
        }
    }
}

impl From<PilotModel> for PilotDto {
    fn from(pilot: PilotModel) -> Self {
        Self {
            id: pilot.id,
            name: pilot.name,
            email: pilot.email,
            phone_number: pilot.phone_number,
            created_at: pilot.created_at,
            updated_at: pilot.updated_at,
        }
    }
}

impl From<LoaderModel> for LoaderDto {
    fn from(loader: LoaderModel) -> Self {
        Self {
            id: loader.id,
            name: loader.name,
            phone_number: loader.phone_number,
            email: loader.email,
            created_at: loader.created_at,
            updated_at: loader.updated_at,
        }
    }
}

impl From<CustomerModel> for CustomerDto {
    fn from(customer: CustomerModel) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone_number: customer.phone_number,
            email: customer.email,
        }
    }
}

impl From<ChemicalModel> for ChemicalDto {
    fn from(chemical: ChemicalModel) -> Self {
        Self {
            id: chemical.id,
            name: chemical.name,
            application_rate: chemical.application_rate,
        }
    }
}

impl From<BaseModel> for BaseDto {
    fn from(base: BaseModel) -> Self {
        Self {
            id: base.id,
            name: base.name,
            location: base.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use agrispray_test_utils::prelude::factory::{
        mock_aircraft_model, mock_load_model, mock_mission_model,
    };

    use super::*;

    #[test]
    fn load_dto_derives_gallons_and_display() {
        let dto = LoadDto::from(mock_load_model(1, "completed", 100.0, 400.0));

        assert_eq!(dto.chemical_amount, 100.0);
        assert_eq!(dto.chemical_amount_gal, 26.42);
        assert_eq!(dto.chemical_amount_display, "26.4 gal (100.0 L)");
        assert_eq!(dto.water_amount_gal, 105.67);
        assert_eq!(dto.water_amount_display, "105.7 gal (400.0 L)");
    }

    #[test]
    fn aircraft_dto_derives_gallons_from_liters() {
        let dto = AircraftDto::from(mock_aircraft_model(1, "N802AB", 3028.33));

        assert_eq!(dto.hopper_capacity_gal, 800.0);
        assert_eq!(dto.hopper_capacity_display, "800.0 gal (3028.3 L)");
    }

    #[test]
    fn mission_dto_formats_field_sizes() {
        let mission = mock_mission_model(1, "planned", 10.0);

        let dto = mission_dto(mission, vec![4, 2]);

        assert_eq!(dto.field_size_sprayable_display, "24.7 ac (10.0 ha)");
        assert_eq!(dto.aircraft_ids, vec![4, 2]);
    }
}
