use crate::data::guild_fetch_job::{GuildFetchJobRepository, STATUS_DONE, STATUS_PENDING};
use crate::error::AppError;
use crate::model::guild::Guild;
use crate::model::guild_fetch_job::GuildFetchJobState;
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find_by_id;
mod mark_done;
mod mark_failed;

fn sample_guilds() -> Vec<Guild> {
    vec![
        Guild {
            id: "111111111".to_string(),
            name: "Guild One".to_string(),
        },
        Guild {
            id: "222222222".to_string(),
            name: "Guild Two".to_string(),
        },
    ]
}
