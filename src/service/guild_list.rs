use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    config::DiscordApiConfig,
    data::guild_fetch_job::GuildFetchJobRepository,
    error::AppError,
    middleware::cache::CacheStatus,
    model::{guild::Guild, guild_fetch_job::GuildFetchJob, identity::Identity},
    service::discord::UserGuildClient,
    state::AppState,
};

/// Outcome of a top-level guild list request.
pub enum GuildListOutcome {
    /// The caller's cache token was fresh; no upstream traffic happened.
    Cached(Vec<Guild>),
    /// A background fetch was started; the caller should poll this job.
    Pending(Uuid),
}

/// Decides, per request, whether the guild list comes from the caller's
/// cache or from a background fetch job.
///
/// There is no state beyond the job rows: every call computes its path from
/// the presented cache status and the store.
pub struct GuildListService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    discord: &'a DiscordApiConfig,
}

impl<'a> GuildListService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            http_client: &state.http_client,
            discord: &state.discord,
        }
    }

    /// Serves the guild list from the presented cache or starts a fetch.
    ///
    /// Returns without waiting for the fetch: the handler path only ever
    /// decodes a cookie and writes one pending row, so the caller gets an
    /// answer immediately either way.
    ///
    /// # Arguments
    /// - `identity` - The signed-in caller
    /// - `cache` - Decoded status of the presented cache cookie
    /// - `force` - Bypass a valid cache and fetch anyway
    pub async fn list(
        &self,
        identity: &Identity,
        cache: CacheStatus,
        force: bool,
    ) -> Result<GuildListOutcome, AppError> {
        if !force {
            if let CacheStatus::Valid(guilds) = cache {
                tracing::debug!(
                    "Serving guild list for caller {} from cache",
                    identity.caller_id
                );
                return Ok(GuildListOutcome::Cached(guilds));
            }
        }

        let job = GuildFetchJobRepository::new(self.db)
            .create(Uuid::new_v4())
            .await?;

        tracing::info!(
            "Started guild fetch job {} for caller {}",
            job.id,
            identity.caller_id
        );

        let db = self.db.clone();
        let http_client = self.http_client.clone();
        let discord = self.discord.clone();
        let access_token = identity.access_token.clone();
        let job_id = job.id;
        tokio::spawn(async move {
            run_fetch_job(db, http_client, discord, job_id, access_token).await;
        });

        Ok(GuildListOutcome::Pending(job.id))
    }

    /// Looks up a fetch job for a polling caller.
    ///
    /// `None` means the id was never created or has already been reclaimed;
    /// the caller restarts with a fresh `list` call.
    pub async fn poll(&self, job_id: Uuid) -> Result<Option<GuildFetchJob>, AppError> {
        GuildFetchJobRepository::new(self.db).find_by_id(job_id).await
    }
}

/// Body of the detached fetch task.
///
/// Runs to completion regardless of whether anyone is still polling; its
/// only externally observable effect is the single terminal write on the
/// job row. Retry and backoff sleeps all happen here, off the request path.
async fn run_fetch_job(
    db: DatabaseConnection,
    http_client: reqwest::Client,
    discord: DiscordApiConfig,
    job_id: Uuid,
    access_token: String,
) {
    let client = UserGuildClient::new(&http_client, &discord);
    let repo = GuildFetchJobRepository::new(&db);

    let result = match client.fetch_user_guilds(&access_token).await {
        Ok(guilds) => {
            tracing::info!("Guild fetch job {} resolved {} guilds", job_id, guilds.len());
            repo.mark_done(job_id, &guilds).await
        }
        Err(err) => {
            tracing::warn!("Guild fetch job {} failed: {}", job_id, err);
            repo.mark_failed(job_id, &err.to_string()).await
        }
    };

    if let Err(err) = result {
        tracing::error!("Failed to record result of guild fetch job {}: {}", job_id, err);
    }
}

#[cfg(test)]
mod test;
