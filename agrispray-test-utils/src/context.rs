//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context
//! holds an in-memory SQLite database and the secret used to sign test tokens.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_operations_tables().build().await?;
///
/// let pilot = test.ops().insert_mock_pilot("Jane Doe").await?;
/// let token = test.auth().mint_token(pilot.id, &["ROLE_PILOT"])?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Secret used to sign and verify test bearer tokens
    pub jwt_secret: String,
}

impl TestContext {
    /// Convert the database connection and token secret into any type that can be
    /// constructed from them.
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main agrispray crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.jwt_secret.clone()))
    }

    /// Create a new test context backed by a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            jwt_secret: TEST_JWT_SECRET.to_string(),
        })
    }

    /// Execute CREATE TABLE statements in the order given.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
