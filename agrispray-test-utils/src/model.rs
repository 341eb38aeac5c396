//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main agrispray crate to keep fixtures and
//! tests consistent.

pub type PilotModel = entity::pilot::Model;
pub type LoaderModel = entity::loader::Model;
pub type CustomerModel = entity::customer::Model;
pub type ChemicalModel = entity::chemical::Model;
pub type BaseModel = entity::base::Model;
pub type AircraftModel = entity::aircraft::Model;
pub type MissionModel = entity::mission::Model;
pub type MissionAircraftModel = entity::mission_aircraft::Model;
pub type LoadModel = entity::load::Model;
