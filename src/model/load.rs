use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Preparing,
    Ready,
    Loading,
    Loaded,
    InTransit,
    Spraying,
    Completed,
    Cancelled,
}

impl LoadStatus {
    /// Statuses whose loads count toward chemical and water consumption
    pub const COUNTED: [LoadStatus; 2] = [LoadStatus::Completed, LoadStatus::Spraying];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::InTransit => "in_transit",
            Self::Spraying => "spraying",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadDto {
    pub id: i32,
    pub loader_id: i32,
    pub chemical_id: i32,
    pub mission_id: i32,
    pub load_number: i32,
    /// Liters
    pub chemical_amount: f64,
    pub chemical_amount_gal: f64,
    pub chemical_amount_display: String,
    /// Liters
    pub water_amount: f64,
    pub water_amount_gal: f64,
    pub water_amount_display: String,
    pub status: String,
}

/// Amounts may be given in liters or gallons; gallons win when both are present
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoadDto {
    pub loader_id: i32,
    pub chemical_id: i32,
    pub mission_id: i32,
    pub load_number: i32,
    pub chemical_amount: Option<f64>,
    pub chemical_amount_gal: Option<f64>,
    pub water_amount: Option<f64>,
    pub water_amount_gal: Option<f64>,
    /// Defaults to `preparing`
    pub status: Option<LoadStatus>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoadDto {
    pub load_number: Option<i32>,
    pub chemical_amount: Option<f64>,
    pub chemical_amount_gal: Option<f64>,
    pub water_amount: Option<f64>,
    pub water_amount_gal: Option<f64>,
    pub status: Option<LoadStatus>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoadQuery {
    /// Only loads of this mission ID
    pub mission: Option<i32>,
    /// Only loads in this status
    pub status: Option<LoadStatus>,
    /// 1-based page number, defaults to 1, at most 1000000
    pub page: Option<u64>,
    /// Page size, defaults to 10, at most 100
    pub limit: Option<u64>,
}
