//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool and `reqwest::Client`
//! uses an `Arc` internally.

use sea_orm::DatabaseConnection;

use crate::config::DiscordApiConfig;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the job store and session store.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests.
    ///
    /// Configured without redirects so a response can never send the
    /// bearer token to another origin.
    pub http_client: reqwest::Client,

    /// Discord API endpoint and fetch policy.
    pub discord: DiscordApiConfig,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        discord: DiscordApiConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            discord,
        }
    }
}
