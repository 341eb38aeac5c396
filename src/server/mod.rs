//! Server application core modules.
//!
//! This module contains the HTTP surface of agrispray: bearer token authentication,
//! REST controllers, the mission and load aggregation services, SeaORM repositories
//! and the unit conversions applied at the serialization boundary.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
