//! Cookie codec for the caller-owned guild list cache.
//!
//! The resolved guild list travels with the caller as percent-encoded JSON
//! in a cookie instead of living server-side. Decoding is total: anything
//! structurally wrong in the presented value is a cache miss, never an
//! error. The freshness window is checked server-side on every request, so
//! a stale cookie is never trusted even if the browser kept it alive.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::guild::Guild};

pub const GUILD_CACHE_COOKIE: &str = "guilds_cache";

/// Seconds a cache entry stays valid. Also used as the cookie Max-Age.
pub const GUILD_CACHE_TTL_SECONDS: i64 = 300;

/// Wire form of the cookie payload.
#[derive(Serialize, Deserialize)]
struct GuildCacheEntry {
    guilds: Vec<Guild>,
    fetched_at: i64,
}

/// Outcome of inspecting a presented cache token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    /// Structurally valid and inside the freshness window.
    Valid(Vec<Guild>),
    /// Structurally valid but past the freshness window.
    Expired,
    /// Not decodable as a cache entry. Treated exactly like a miss.
    Malformed,
    /// No cookie was presented. Produced by the transport layer, not by
    /// `decode_guild_cache`.
    Missing,
}

/// Builds a fresh cache cookie for the given guild list.
///
/// The payload is JSON percent-encoded for the cookie value; `Max-Age`
/// matches the server-side freshness window and `SameSite=Lax` keeps the
/// cookie off cross-site subrequests.
pub fn encode_guild_cache(
    guilds: &[Guild],
    now: DateTime<Utc>,
) -> Result<Cookie<'static>, AppError> {
    let entry = GuildCacheEntry {
        guilds: guilds.to_vec(),
        fetched_at: now.timestamp(),
    };
    let json = serde_json::to_string(&entry)
        .map_err(|e| AppError::InternalError(format!("Failed to encode guild cache: {}", e)))?;

    let mut cookie = Cookie::new(GUILD_CACHE_COOKIE, urlencoding::encode(&json).into_owned());
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::seconds(GUILD_CACHE_TTL_SECONDS));

    Ok(cookie)
}

/// Inspects a presented cookie value.
///
/// Valid iff the value decodes to a cache entry and
/// `now - fetched_at < GUILD_CACHE_TTL_SECONDS`.
pub fn decode_guild_cache(value: &str, now: DateTime<Utc>) -> CacheStatus {
    let Ok(json) = urlencoding::decode(value) else {
        return CacheStatus::Malformed;
    };
    let Ok(entry) = serde_json::from_str::<GuildCacheEntry>(&json) else {
        return CacheStatus::Malformed;
    };

    if now.timestamp() - entry.fetched_at < GUILD_CACHE_TTL_SECONDS {
        CacheStatus::Valid(entry.guilds)
    } else {
        CacheStatus::Expired
    }
}
