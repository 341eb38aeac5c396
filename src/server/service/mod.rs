//! Service layer for aggregation, reporting and write-time rules.
//!
//! Aggregators and report builders are generic over the store traits in
//! [`crate::server::data::store`]. Write services validate request DTOs, convert
//! imperial input to the stored metric units, and call the repositories.

pub mod aggregator;
pub mod aircraft;
pub mod dashboard;
pub mod directory;
pub mod display;
pub mod load;
pub mod mission;
pub mod summary;
pub mod validation;
