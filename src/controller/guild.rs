use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::{
        auth::AuthGuard,
        cache::{decode_guild_cache, encode_guild_cache, CacheStatus, GUILD_CACHE_COOKIE},
    },
    model::{
        api::{GuildListDto, GuildPollDto},
        guild_fetch_job::GuildFetchJobState,
    },
    service::guild_list::{GuildListOutcome, GuildListService},
    state::AppState,
};

/// Query parameters for `GET /api/guilds`.
#[derive(Deserialize)]
pub struct GuildListQuery {
    /// `force=1` bypasses a fresh cache token.
    pub force: Option<u8>,
    /// Present when polling a previously started fetch job.
    pub job_id: Option<String>,
}

/// GET /api/guilds - Guild list for the signed-in caller
///
/// Without `job_id`: serves the cached list when the caller presents a
/// fresh `guilds_cache` cookie (and `force` is unset), otherwise starts a
/// background fetch and returns the job id to poll.
///
/// With `job_id`: reports that job's status. A finished job carries the
/// guild list plus a fresh cache cookie for the caller's next visit; an
/// unknown id answers 404 so the caller restarts the flow.
///
/// # Authentication
/// Requires a signed-in caller (identity in session)
///
/// # Returns
/// - `200 OK`: cached / pending / done / error payload (see `model::api`)
/// - `401 Unauthorized`: no caller identity in session
/// - `404 Not Found`: polled job id was never created or was reclaimed
pub async fn get_guild_list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<GuildListQuery>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let identity = AuthGuard::new(&session).require().await?;

    let service = GuildListService::new(&state);

    // A presented job id always means the caller is polling, even if a
    // valid cache cookie rides along.
    if let Some(job_id) = &query.job_id {
        return poll_job(&service, jar, job_id).await;
    }

    let cache = match jar.get(GUILD_CACHE_COOKIE) {
        Some(cookie) => decode_guild_cache(cookie.value(), Utc::now()),
        None => CacheStatus::Missing,
    };
    let force = query.force == Some(1);

    let response = match service.list(&identity, cache, force).await? {
        GuildListOutcome::Cached(guilds) => Json(GuildListDto::Cached {
            guilds: guilds.into_iter().map(Into::into).collect(),
        }),
        GuildListOutcome::Pending(job_id) => Json(GuildListDto::Pending { job_id }),
    };

    Ok((StatusCode::OK, response).into_response())
}

async fn poll_job(
    service: &GuildListService<'_>,
    jar: CookieJar,
    job_id: &str,
) -> Result<Response, AppError> {
    // A syntactically invalid id cannot name a job we issued
    let Ok(job_id) = Uuid::parse_str(job_id) else {
        return Ok((StatusCode::NOT_FOUND, Json(GuildPollDto::NotFound)).into_response());
    };

    let Some(job) = service.poll(job_id).await? else {
        return Ok((StatusCode::NOT_FOUND, Json(GuildPollDto::NotFound)).into_response());
    };

    Ok(match job.state {
        GuildFetchJobState::Pending => {
            (StatusCode::OK, Json(GuildPollDto::Pending)).into_response()
        }
        GuildFetchJobState::Done(guilds) => {
            let cookie = encode_guild_cache(&guilds, Utc::now())?;
            (
                StatusCode::OK,
                jar.add(cookie),
                Json(GuildPollDto::Done {
                    guilds: guilds.into_iter().map(Into::into).collect(),
                }),
            )
                .into_response()
        }
        GuildFetchJobState::Failed(error) => {
            (StatusCode::OK, Json(GuildPollDto::Error { error })).into_response()
        }
    })
}
