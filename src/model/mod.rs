//! Request and response DTOs shared across the HTTP API.

pub mod api;
pub mod catalog;
pub mod dashboard;
pub mod load;
pub mod mission;
pub mod personnel;
