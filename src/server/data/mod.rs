//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. The load and mission repositories
//! also implement the [`store`] traits that the aggregators are generic over, so
//! sums, averages and counts run inside the database.

pub mod aircraft;
pub mod base;
pub mod chemical;
pub mod customer;
pub mod load;
pub mod loader;
pub mod mission;
pub mod pilot;
pub mod store;
