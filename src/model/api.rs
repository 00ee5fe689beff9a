use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::guild::Guild;

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Guild entry as served to the dashboard.
#[derive(Serialize, Deserialize)]
pub struct GuildDto {
    pub id: String,
    pub name: String,
}

impl From<Guild> for GuildDto {
    fn from(guild: Guild) -> Self {
        Self {
            id: guild.id,
            name: guild.name,
        }
    }
}

/// Response body for `GET /api/guilds` without a `job_id`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GuildListDto {
    /// Served straight from the caller's cache cookie.
    Cached { guilds: Vec<GuildDto> },
    /// A background fetch was started; poll with this job id.
    Pending { job_id: Uuid },
}

/// Response body for `GET /api/guilds?job_id=...`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GuildPollDto {
    /// The fetch is still running; poll again shortly.
    Pending,
    /// The fetch finished; the response also carries a fresh cache cookie.
    Done { guilds: Vec<GuildDto> },
    /// The fetch failed; `error` holds the upstream detail.
    Error { error: String },
    /// The job id was never created or has been reclaimed. The caller
    /// should restart with a fresh list request.
    NotFound,
}
