use entity::prelude::{DanceClass, Dancer};
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs, then opens a [`TestContext`] with them.
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new().with_dance_tables().build().await?;
/// let dancer = test_utils::factory::create_dancer(&test.db).await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table for one entity, derived from its SeaORM definition.
    ///
    /// Dance classes embed their dancers as JSON, so there are no foreign keys
    /// and tables may be added in any order.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds both collections served by the API.
    ///
    /// Router and GraphQL tests need this since either transport can reach
    /// dancers and dance classes.
    pub fn with_dance_tables(self) -> Self {
        self.with_table(Dancer).with_table(DanceClass)
    }

    /// Opens the in-memory database and creates every added table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::connect(self.tables).await
    }
}
