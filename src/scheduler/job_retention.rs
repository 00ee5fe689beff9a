use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::guild_fetch_job::GuildFetchJobRepository, error::AppError};

/// Starts the guild fetch job retention scheduler
///
/// Runs every five minutes and deletes job rows older than the configured
/// retention window. Finished rows that old have long been collected by
/// their poller; pending rows that old are orphans from a dead process and
/// deleting them turns a stuck poll into a not-found, which tells the
/// caller to restart.
///
/// # Arguments
/// - `db`: Database connection
/// - `retention`: Age at which job rows are reclaimed
pub async fn start_scheduler(
    db: DatabaseConnection,
    retention: chrono::Duration,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();

    // Schedule job to run every five minutes
    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_expired_jobs(&db, retention).await {
                tracing::error!("Error sweeping guild fetch jobs: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Guild fetch job retention scheduler started");

    Ok(())
}

/// Deletes job rows older than the retention window
async fn sweep_expired_jobs(
    db: &DatabaseConnection,
    retention: chrono::Duration,
) -> Result<(), AppError> {
    let cutoff = Utc::now() - retention;

    let deleted = GuildFetchJobRepository::new(db)
        .delete_created_before(cutoff)
        .await?;

    if deleted > 0 {
        tracing::debug!("Reclaimed {} guild fetch jobs", deleted);
    }

    Ok(())
}
