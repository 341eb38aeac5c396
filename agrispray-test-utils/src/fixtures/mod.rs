//! Test fixture modules.
//!
//! - `auth` - Signed bearer tokens for authenticated requests
//! - `ops` - Personnel, catalog, mission and load records

pub mod auth;
pub mod ops;
