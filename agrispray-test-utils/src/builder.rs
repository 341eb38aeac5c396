//! Declarative test builder.
//!
//! Configure tables before execution, chaining methods and finalizing with
//! `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_operations_tables: bool,
}

impl TestBuilder {
    /// Create an empty builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_operations_tables: false,
        }
    }

    /// Add every table used by spraying operations to the test database.
    ///
    /// Tables are created parents first so foreign keys resolve: pilot, customer,
    /// base, aircraft, chemical, loader, mission, mission_aircraft, load.
    pub fn with_operations_tables(mut self) -> Self {
        self.include_operations_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order
    /// after the operations tables.
    ///
    /// ```no_run
    /// use agrispray_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), agrispray_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Pilot)
    ///     .with_table(Customer)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context by creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_operations_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Pilot),
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Base),
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::Chemical),
                schema.create_table_from_entity(entity::prelude::Loader),
                schema.create_table_from_entity(entity::prelude::Mission),
                schema.create_table_from_entity(entity::prelude::MissionAircraft),
                schema.create_table_from_entity(entity::prelude::Load),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
