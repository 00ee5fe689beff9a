use std::time::Duration;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_FETCH_ATTEMPTS: u32 = 2;
const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_JOB_RETENTION_MINUTES: i64 = 60;

/// Discord REST API settings shared by every fetch job.
#[derive(Clone, Debug)]
pub struct DiscordApiConfig {
    pub api_base_url: Url,
    /// Upstream attempts per background job.
    pub fetch_attempts: u32,
    /// Deadline for each individual attempt.
    pub fetch_timeout: Duration,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub discord: DiscordApiConfig,
    /// How long fetch job rows are kept before the retention sweep deletes
    /// them.
    pub job_retention: chrono::Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url,
            bind_address,
            discord: DiscordApiConfig {
                api_base_url: parse_env_url("DISCORD_API_URL", DISCORD_API_URL)?,
                fetch_attempts: parse_env_number("GUILD_FETCH_ATTEMPTS", DEFAULT_FETCH_ATTEMPTS)?,
                fetch_timeout: Duration::from_secs(parse_env_number(
                    "GUILD_FETCH_TIMEOUT_SECONDS",
                    DEFAULT_FETCH_TIMEOUT_SECONDS,
                )?),
            },
            job_retention: chrono::Duration::minutes(parse_env_number(
                "GUILD_JOB_RETENTION_MINUTES",
                DEFAULT_JOB_RETENTION_MINUTES,
            )?),
        })
    }
}

fn parse_env_url(name: &str, default: &str) -> Result<Url, AppError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    Url::parse(&value).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
        }
        .into()
    })
}

fn parse_env_number<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}
