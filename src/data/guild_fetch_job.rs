use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    model::{
        guild::Guild,
        guild_fetch_job::{GuildFetchJob, GuildFetchJobState},
    },
};

/// Status column values for `guild_fetch_job` rows.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_DONE: &str = "done";
pub const STATUS_ERROR: &str = "error";

pub struct GuildFetchJobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildFetchJobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pending job row.
    pub async fn create(&self, id: Uuid) -> Result<GuildFetchJob, AppError> {
        let row = entity::guild_fetch_job::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            status: ActiveValue::Set(STATUS_PENDING.to_string()),
            guilds: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        into_job(row)
    }

    /// Finds a job by its id.
    ///
    /// # Returns
    /// - `Ok(Some(job))` - Job found
    /// - `Ok(None)` - Unknown or already reclaimed id
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GuildFetchJob>, AppError> {
        let Some(row) = entity::prelude::GuildFetchJob::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(into_job(row)?))
    }

    /// Records the successful terminal state for a job.
    ///
    /// The background task is the only caller, so each job sees at most one
    /// terminal write.
    pub async fn mark_done(&self, id: Uuid, guilds: &[Guild]) -> Result<(), AppError> {
        let payload = serde_json::to_string(guilds)
            .map_err(|e| AppError::InternalError(format!("Failed to encode guild list: {}", e)))?;

        entity::guild_fetch_job::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            status: ActiveValue::Set(STATUS_DONE.to_string()),
            guilds: ActiveValue::Set(Some(payload)),
            completed_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Records the failed terminal state for a job.
    pub async fn mark_failed(&self, id: Uuid, detail: &str) -> Result<(), AppError> {
        entity::guild_fetch_job::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            status: ActiveValue::Set(STATUS_ERROR.to_string()),
            error: ActiveValue::Set(Some(detail.to_string())),
            completed_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every job row created before the cutoff, regardless of
    /// status. Pending rows that old are orphans from a dead process;
    /// removing them turns a stuck poll into a not-found, which tells the
    /// caller to restart.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of rows removed
    pub async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::GuildFetchJob::delete_many()
            .filter(entity::guild_fetch_job::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Converts an entity row into the domain model. A row that violates the
/// status/payload pairing is corrupt and surfaces as an internal error.
fn into_job(row: entity::guild_fetch_job::Model) -> Result<GuildFetchJob, AppError> {
    let id = Uuid::parse_str(&row.id)
        .map_err(|e| AppError::InternalError(format!("Invalid job id '{}': {}", row.id, e)))?;

    let state = match row.status.as_str() {
        STATUS_PENDING => GuildFetchJobState::Pending,
        STATUS_DONE => {
            let Some(payload) = row.guilds else {
                return Err(AppError::InternalError(format!(
                    "Job {} is done but has no guild list",
                    row.id
                )));
            };
            let guilds = serde_json::from_str(&payload).map_err(|e| {
                AppError::InternalError(format!(
                    "Failed to decode guild list for job {}: {}",
                    row.id, e
                ))
            })?;
            GuildFetchJobState::Done(guilds)
        }
        STATUS_ERROR => GuildFetchJobState::Failed(row.error.unwrap_or_default()),
        other => {
            return Err(AppError::InternalError(format!(
                "Unknown status '{}' for job {}",
                other, row.id
            )))
        }
    };

    Ok(GuildFetchJob {
        id,
        created_at: row.created_at,
        state,
    })
}
