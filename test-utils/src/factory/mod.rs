//! Factory methods for seeding test data.

pub mod guild_fetch_job;
