//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with `State` and an `AuthUser`, except in `router`
//! which sends requests through the full router to cover bearer token extraction.

mod catalog;
mod dashboard;
mod load;
mod mission;
mod mission_summaries;
mod personnel;
mod pilot_missions;
mod router;

use agrispray_test_utils::prelude::*;

use crate::util::{loader, manager, pilot, read_json, TestContextExt};
