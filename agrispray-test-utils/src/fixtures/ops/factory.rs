//! Factory functions for generating mock operations models.
//!
//! Pure functions returning in-memory models with standard test values, suitable
//! for unit tests that don't touch the database.

use chrono::Utc;

use crate::model::{AircraftModel, LoadModel, MissionModel};

/// Create a mission model owned by pilot, customer and base `1`.
///
/// # Arguments
/// - `id` - Mission ID
/// - `status` - Mission status such as `completed`
/// - `field_size_sprayable` - Sprayable area in hectares
pub fn mock_mission_model(id: i32, status: &str, field_size_sprayable: f64) -> MissionModel {
    let now = Utc::now().naive_utc();
    MissionModel {
        id,
        pilot_id: 1,
        customer_id: 1,
        base_id: 1,
        title: Some(format!("Mission {}", id)),
        mission_type: Some("herbicide".to_string()),
        field_size_total: field_size_sprayable,
        field_size_sprayable,
        location: Some("North Field".to_string()),
        status: status.to_string(),
        scheduled_at: Some(now),
        created_at: now,
        updated_at: None,
    }
}

/// Create a load model for mission `1` with amounts in liters.
pub fn mock_load_model(id: i32, status: &str, chemical_amount: f64, water_amount: f64) -> LoadModel {
    LoadModel {
        id,
        loader_id: 1,
        chemical_id: 1,
        mission_id: 1,
        load_number: id,
        chemical_amount,
        water_amount,
        status: status.to_string(),
    }
}

/// Create an aircraft model with the given hopper capacity in liters.
pub fn mock_aircraft_model(id: i32, registration_number: &str, hopper_capacity_lt: f64) -> AircraftModel {
    AircraftModel {
        id,
        registration_number: registration_number.to_string(),
        model: "Air Tractor AT-802".to_string(),
        hopper_capacity_lt,
    }
}
