use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to create the in-memory database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, UserProfile};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(UserProfile)
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
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables
    /// with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables: User and UserProfile.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(UserProfile)
    }

    /// Adds every table a study needs, in dependency order:
    /// - User, UserProfile, Category
    /// - Study
    /// - StudyUser, Bookmark
    /// - Comment, Metoo
    /// - Notification
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_study_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_study_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Category)
            .with_table(Study)
            .with_table(StudyUser)
            .with_table(Bookmark)
            .with_table(Comment)
            .with_table(Metoo)
            .with_table(Notification)
    }

    /// Adds the notice tables: User and Notice.
    pub fn with_notice_tables(self) -> Self {
        self.with_table(User).with_table(Notice)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_study_tables().with_table(Notice)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
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
