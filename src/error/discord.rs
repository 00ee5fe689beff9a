use std::time::Duration;

use thiserror::Error;

/// Failures talking to the Discord REST API.
///
/// These never cross the HTTP handler boundary directly: the background
/// fetch task records them as the job's failure detail, and pollers read
/// that detail back from the job record.
#[derive(Error, Debug)]
pub enum DiscordApiError {
    /// Still rate limited after every configured attempt.
    #[error("Discord API rate limit was not lifted after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Non-success response other than 429. The body text is preserved so
    /// the dashboard can show what Discord actually said.
    #[error("Discord API error ({status}): {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The final attempt exceeded its per-attempt deadline.
    #[error("Discord API request timed out after {}s", timeout.as_secs())]
    Timeout { timeout: Duration },

    /// Connection-level failure on the final attempt.
    #[error("Discord API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Success response whose body was not a guild list.
    #[error("Discord API returned a malformed guild list: {0}")]
    Decode(#[source] reqwest::Error),
}
