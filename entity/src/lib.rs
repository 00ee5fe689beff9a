//! SeaORM entity models for the voiceboard database.

pub mod guild_fetch_job;
pub mod prelude;
