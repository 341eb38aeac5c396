use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Planned,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    OnHold,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::OnHold => "on_hold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    Herbicide,
    Fungicide,
    Insecticide,
    Fertilizer,
    Seed,
    Other,
}

impl MissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Herbicide => "herbicide",
            Self::Fungicide => "fungicide",
            Self::Insecticide => "insecticide",
            Self::Fertilizer => "fertilizer",
            Self::Seed => "seed",
            Self::Other => "other",
        }
    }
}

/// Flattened reporting record for one mission
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionSummaryDto {
    pub id: i32,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub mission_type: Option<String>,
    pub field_size_total: f64,
    pub field_size_sprayable: f64,
    pub scheduled_at: Option<NaiveDateTime>,
    pub status: String,
    pub pilot_name: String,
    pub customer_name: String,
    /// Registration of the first aircraft assigned to the mission
    pub aircraft_registration: Option<String>,
    /// Every load of the mission regardless of status
    pub total_loads: u64,
    /// Liters across completed or spraying loads
    pub total_chemical_amount: f64,
    /// Liters across completed or spraying loads
    pub total_water_amount: f64,
    /// Chemical liters per sprayable hectare, `0` when the area is zero
    pub application_rate: f64,
}

/// Filters and page shared by the mission list and mission summary endpoints
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MissionQuery {
    /// Only missions in this status
    pub status: Option<MissionStatus>,
    /// Only missions flown by this pilot ID
    pub pilot: Option<i32>,
    /// Only missions for this customer ID
    pub customer: Option<i32>,
    /// 1-based page number, defaults to 1, at most 1000000
    pub page: Option<u64>,
    /// Page size, defaults to 10, at most 100
    pub limit: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionDto {
    pub id: i32,
    pub pilot_id: i32,
    pub customer_id: i32,
    pub base_id: i32,
    /// Assigned aircraft in assignment order
    pub aircraft_ids: Vec<i32>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub mission_type: Option<String>,
    pub field_size_total: f64,
    pub field_size_total_display: String,
    pub field_size_sprayable: f64,
    pub field_size_sprayable_display: String,
    pub location: Option<String>,
    pub status: String,
    pub scheduled_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMissionDto {
    pub pilot_id: i32,
    pub customer_id: i32,
    pub base_id: i32,
    pub aircraft_ids: Vec<i32>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub mission_type: Option<MissionType>,
    /// Hectares
    pub field_size_total: f64,
    /// Hectares
    pub field_size_sprayable: f64,
    pub location: Option<String>,
    /// Defaults to `planned`
    pub status: Option<MissionStatus>,
    pub scheduled_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMissionDto {
    pub pilot_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub base_id: Option<i32>,
    /// Replaces every aircraft assignment when present
    pub aircraft_ids: Option<Vec<i32>>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub mission_type: Option<MissionType>,
    pub field_size_total: Option<f64>,
    pub field_size_sprayable: Option<f64>,
    pub location: Option<String>,
    pub status: Option<MissionStatus>,
    pub scheduled_at: Option<NaiveDateTime>,
}
