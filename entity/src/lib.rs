//! SeaORM entities for the aerial-spraying operations schema.

pub mod prelude;

pub mod aircraft;
pub mod base;
pub mod chemical;
pub mod customer;
pub mod load;
pub mod loader;
pub mod mission;
pub mod mission_aircraft;
pub mod pilot;
