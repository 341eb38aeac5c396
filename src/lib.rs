//! Mission management and reporting API for agricultural aerial-spraying operations.

pub mod model;
pub mod server;
