use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::guild::Guild;

/// One background guild fetch attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuildFetchJob {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: GuildFetchJobState,
}

/// Lifecycle of a fetch job.
///
/// Written once by the background task: `Pending` to `Done` or `Pending` to
/// `Failed`, never back. Pollers may observe `Pending` any number of times
/// but always read the same terminal state afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuildFetchJobState {
    Pending,
    Done(Vec<Guild>),
    Failed(String),
}
