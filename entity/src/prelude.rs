pub use super::guild_fetch_job::Entity as GuildFetchJob;
