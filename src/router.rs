use axum::{routing::get, Router};

use crate::{controller::guild::get_guild_list, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/guilds", get(get_guild_list))
}
