//! Spraying operations fixture utilities.
//!
//! Methods for inserting personnel, catalog, mission and load records into the
//! test database, plus factory functions for in-memory models.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn ops<'a>(&'a mut self) -> OpsFixtures<'a> {
        OpsFixtures { setup: self }
    }
}

pub struct OpsFixtures<'a> {
    pub setup: &'a mut TestContext,
}
