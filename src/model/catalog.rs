use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalDto {
    pub id: i32,
    pub name: String,
    /// Liters per hectare
    pub application_rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChemicalDto {
    pub name: String,
    /// Liters per hectare
    pub application_rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseDto {
    pub id: i32,
    pub name: String,
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBaseDto {
    pub name: String,
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AircraftDto {
    pub id: i32,
    pub registration_number: String,
    pub model: String,
    pub hopper_capacity_lt: f64,
    /// Derived from the stored liters
    pub hopper_capacity_gal: f64,
    pub hopper_capacity_display: String,
}

/// At least one capacity is required; gallons overwrite liters when both are given
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAircraftDto {
    pub registration_number: String,
    pub model: String,
    pub hopper_capacity_gal: Option<f64>,
    pub hopper_capacity_lt: Option<f64>,
}

/// Absent fields keep their stored value; a blank `email` clears it
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDto {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChemicalDto {
    pub name: Option<String>,
    /// Liters per hectare
    pub application_rate: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBaseDto {
    pub name: Option<String>,
    pub location: Option<String>,
}

/// Capacities follow the create rules when either is given
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAircraftDto {
    pub registration_number: Option<String>,
    pub model: Option<String>,
    pub hopper_capacity_gal: Option<f64>,
    pub hopper_capacity_lt: Option<f64>,
}
