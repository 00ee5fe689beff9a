//! Guild fetch job factory for seeding job rows in tests.
//!
//! Provides a builder pattern for creating `guild_fetch_job` rows with
//! sensible defaults that can be overridden for specific test scenarios.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Status column values mirrored from the application's data layer.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_DONE: &str = "done";
pub const STATUS_ERROR: &str = "error";

/// Factory for creating test guild fetch jobs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_fetch_job::GuildFetchJobFactory;
///
/// let job = GuildFetchJobFactory::new(&db)
///     .status(STATUS_DONE)
///     .guilds_json(Some(r#"[{"id":"1","name":"Guild"}]"#.to_string()))
///     .build()
///     .await?;
/// ```
pub struct GuildFetchJobFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    status: String,
    guilds: Option<String>,
    error: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> GuildFetchJobFactory<'a> {
    /// Creates a new factory with default values: a fresh UUID v4 id, a
    /// `pending` status and `created_at` set to now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4().to_string(),
            status: STATUS_PENDING.to_string(),
            guilds: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Sets the job id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the status column value.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the JSON-encoded guild list column.
    pub fn guilds_json(mut self, guilds: Option<String>) -> Self {
        self.guilds = guilds;
        self
    }

    /// Sets the failure detail column.
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the completion timestamp.
    pub fn completed_at(mut self, completed_at: Option<DateTime<Utc>>) -> Self {
        self.completed_at = completed_at;
        self
    }

    /// Builds and inserts the job row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_fetch_job::Model)` - Created job row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_fetch_job::Model, DbErr> {
        entity::guild_fetch_job::ActiveModel {
            id: ActiveValue::Set(self.id),
            status: ActiveValue::Set(self.status),
            guilds: ActiveValue::Set(self.guilds),
            error: ActiveValue::Set(self.error),
            created_at: ActiveValue::Set(self.created_at),
            completed_at: ActiveValue::Set(self.completed_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending guild fetch job with default values.
///
/// Shorthand for `GuildFetchJobFactory::new(db).build().await`.
pub async fn create_job(db: &DatabaseConnection) -> Result<entity::guild_fetch_job::Model, DbErr> {
    GuildFetchJobFactory::new(db).build().await
}
