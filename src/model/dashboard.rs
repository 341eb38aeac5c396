use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// System-wide snapshot recomputed on every request
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_missions: u64,
    /// Missions in `scheduled` status
    pub active_missions: u64,
    pub completed_missions: u64,
    pub cancelled_missions: u64,
    pub total_loads: u64,
    /// Loads in `preparing` status
    pub pending_loads: u64,
    pub total_pilots: u64,
    /// Always equal to `totalPilots`, no activity predicate exists
    pub active_pilots: u64,
    pub total_loaders: u64,
    pub total_customers: u64,
    pub total_aircraft: u64,
    /// Always equal to `totalAircraft`, no availability predicate exists
    pub available_aircraft: u64,
    pub total_chemicals: u64,
    /// Hectares sprayed across completed missions
    pub total_area_sprayed: f64,
    /// Liters of chemical across completed or spraying loads
    pub total_chemical_used: f64,
    /// Liters of water across completed or spraying loads
    pub total_water_used: f64,
    /// Average sprayable field size of completed missions, in hectares
    pub average_application_rate: f64,
    pub last_updated: NaiveDate,
}
