use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent setup for tests that need database tables.
///
/// Queues CREATE TABLE statements derived from SeaORM entities, then
/// produces a [`TestContext`] whose in-memory database has them applied.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::GuildFetchJob;
///
/// let test = TestBuilder::new()
///     .with_table(GuildFetchJob)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the CREATE TABLE statement derived from an entity model.
    ///
    /// Statements are generated with SQLite syntax and applied in the
    /// order the tables were added.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connects the test database and applies the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        context.create_tables(self.tables).await?;

        Ok(context)
    }
}
