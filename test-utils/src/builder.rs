use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Plan, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Plan)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables a plan needs: users, plans and plan memberships.
    pub fn with_plan_tables(self) -> Self {
        self.with_table(User).with_table(Plan).with_table(PlanUser)
    }

    /// Adds the plan tables plus schedules with their location, vehicle and budget rows.
    pub fn with_schedule_tables(self) -> Self {
        self.with_plan_tables()
            .with_table(Location)
            .with_table(Vehicle)
            .with_table(Budget)
            .with_table(Schedule)
    }

    /// Adds the plan tables plus comments, likes and bookmarks.
    pub fn with_social_tables(self) -> Self {
        self.with_plan_tables()
            .with_table(Comment)
            .with_table(Like)
            .with_table(Bookmark)
    }

    /// Adds the plan tables plus chat rooms, room members and messages.
    pub fn with_chat_tables(self) -> Self {
        self.with_plan_tables()
            .with_table(ChatRoom)
            .with_table(ChatRoomUser)
            .with_table(ChatMessage)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Use this for service tests that touch several aggregates at once, such as
    /// user deletion or plan copying.
    pub fn with_all_tables(self) -> Self {
        self.with_schedule_tables()
            .with_table(Comment)
            .with_table(Like)
            .with_table(Bookmark)
            .with_table(ChatRoom)
            .with_table(ChatRoomUser)
            .with_table(ChatMessage)
            .with_table(RefreshToken)
            .with_table(Alarm)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
