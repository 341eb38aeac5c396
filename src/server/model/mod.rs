//! Server application models.
//!
//! Application state shared by handlers, the authenticated-user extractor, and
//! type aliases for database models.

pub mod app;
pub mod auth;
pub mod db;
