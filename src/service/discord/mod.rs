pub mod user_guild;

pub use user_guild::UserGuildClient;
