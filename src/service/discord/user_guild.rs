use std::time::Duration;

use serde::Deserialize;

use crate::{config::DiscordApiConfig, error::discord::DiscordApiError, model::guild::Guild};

/// Delay before retrying after a connection-level failure.
const TRANSPORT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Fallback when a 429 carries no usable `retry_after` hint.
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 1;

/// Rate-limit body Discord returns alongside a 429.
#[derive(Deserialize)]
struct RateLimitBody {
    /// Seconds to wait, possibly fractional.
    retry_after: Option<f64>,
}

/// Outcome of a single upstream attempt.
enum AttemptError {
    /// 429; holds the (rounded up) wait the provider asked for.
    RateLimited { retry_after: Duration },
    /// Connection error or per-attempt deadline exceeded.
    Transport(reqwest::Error),
    /// Not worth another attempt: a non-429 error status or an
    /// undecodable success body.
    Fatal(DiscordApiError),
}

/// REST client for the guild list of the signed-in user.
///
/// Uses the caller's own bearer token, not a bot token, because the
/// `/users/@me/guilds` route is scoped to the token owner.
pub struct UserGuildClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a DiscordApiConfig,
}

impl<'a> UserGuildClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a DiscordApiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetches the guilds the token's owner belongs to.
    ///
    /// Makes at most `fetch_attempts` attempts, each bounded by
    /// `fetch_timeout`. A 429 sleeps out the advertised `retry_after`
    /// before the next attempt; any other error status is surfaced
    /// immediately with the upstream body text. All sleeping happens on the
    /// detached job task, never on a request handler.
    ///
    /// # Returns
    /// - `Ok(Vec<Guild>)` - Normalized guild list, upstream order preserved
    /// - `Err(DiscordApiError)` - Attempts exhausted or a fatal response
    pub async fn fetch_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<Guild>, DiscordApiError> {
        let url = format!(
            "{}/users/@me/guilds",
            self.config.api_base_url.as_str().trim_end_matches('/')
        );

        let mut attempt = 1;
        loop {
            match self.attempt_fetch(&url, access_token).await {
                Ok(guilds) => return Ok(guilds),
                Err(AttemptError::RateLimited { retry_after }) => {
                    if attempt >= self.config.fetch_attempts {
                        return Err(DiscordApiError::RateLimited { attempts: attempt });
                    }
                    tracing::debug!(
                        "Guild fetch rate limited, waiting {}s before attempt {}",
                        retry_after.as_secs(),
                        attempt + 1
                    );
                    tokio::time::sleep(retry_after).await;
                }
                Err(AttemptError::Transport(err)) => {
                    if attempt >= self.config.fetch_attempts {
                        return Err(if err.is_timeout() {
                            DiscordApiError::Timeout {
                                timeout: self.config.fetch_timeout,
                            }
                        } else {
                            DiscordApiError::Transport(err)
                        });
                    }
                    tracing::debug!("Guild fetch attempt {} failed: {}", attempt, err);
                    tokio::time::sleep(TRANSPORT_RETRY_DELAY).await;
                }
                Err(AttemptError::Fatal(err)) => return Err(err),
            }
            attempt += 1;
        }
    }

    async fn attempt_fetch(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<Vec<Guild>, AttemptError> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", access_token))
            .timeout(self.config.fetch_timeout)
            .send()
            .await
            .map_err(AttemptError::Transport)?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let seconds = match response.json::<RateLimitBody>().await {
                Ok(body) => body
                    .retry_after
                    .map(|s| s.ceil() as u64)
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS),
                Err(_) => DEFAULT_RETRY_AFTER_SECONDS,
            };
            return Err(AttemptError::RateLimited {
                retry_after: Duration::from_secs(seconds),
            });
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError::Fatal(DiscordApiError::Upstream {
                status,
                body,
            }));
        }

        // Deserializing into Guild keeps only id and name; everything else
        // in the upstream record is dropped here.
        response
            .json::<Vec<Guild>>()
            .await
            .map_err(|e| AttemptError::Fatal(DiscordApiError::Decode(e)))
    }
}
