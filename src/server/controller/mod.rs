//! HTTP controller endpoints for the agrispray web API.
//!
//! Handlers authenticate the caller through the [`AuthUser`](crate::server::model::auth::AuthUser)
//! extractor, apply their role gate, call into the service layer and return JSON.
//! Every handler is annotated for utoipa so the OpenAPI document stays in sync
//! with the router.

pub mod catalog;
pub mod dashboard;
pub mod load;
pub mod mission;
pub mod personnel;

use crate::server::model::auth::Role;

/// Roles allowed to write missions and loaders
pub(crate) const FIELD_STAFF: &[Role] = &[Role::Manager, Role::Pilot];
/// Roles allowed to write loads
pub(crate) const LOAD_CREW: &[Role] = &[Role::Manager, Role::Pilot, Role::Loader];
pub(crate) const MANAGER: &[Role] = &[Role::Manager];
