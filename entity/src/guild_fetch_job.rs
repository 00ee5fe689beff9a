use sea_orm::entity::prelude::*;

/// One background guild fetch attempt.
///
/// A row is inserted as `pending` when the fetch is started and receives
/// exactly one further write, moving it to `done` or `error`. After that the
/// row is immutable until the retention sweep deletes it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_fetch_job")]
pub struct Model {
    /// Server-generated job id (UUID v4).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Lifecycle status: `pending`, `done` or `error`.
    pub status: String,
    /// JSON-encoded guild list, set once the status is `done`.
    pub guilds: Option<String>,
    /// Failure detail, set once the status is `error`.
    pub error: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub completed_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
