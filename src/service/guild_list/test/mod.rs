use std::time::Duration;

use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{
    config::DiscordApiConfig,
    middleware::cache::CacheStatus,
    model::{
        guild::Guild,
        guild_fetch_job::{GuildFetchJob, GuildFetchJobState},
        identity::Identity,
    },
    service::guild_list::{GuildListOutcome, GuildListService},
    state::AppState,
};


fn test_state(db: &DatabaseConnection, server: &MockServer) -> AppState {
    AppState::new(
        db.clone(),
        reqwest::Client::new(),
        DiscordApiConfig {
            api_base_url: Url::parse(&server.uri()).unwrap(),
            fetch_attempts: 2,
            fetch_timeout: Duration::from_secs(2),
        },
    )
}

fn test_identity() -> Identity {
    Identity {
        caller_id: "123456789".to_string(),
        access_token: "token-abc".to_string(),
    }
}

fn sample_guilds() -> Vec<Guild> {
    vec![
        Guild {
            id: "111111111".to_string(),
            name: "Guild One".to_string(),
        },
        Guild {
            id: "222222222".to_string(),
            name: "Guild Two".to_string(),
        },
    ]
}

async fn mount_guild_response(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/@me/guilds"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"id":"111111111","name":"Guild One","icon":null,"owner":false,"permissions":"104324673"},
                {"id":"222222222","name":"Guild Two","icon":"a1b2c3","owner":true,"permissions":"8"}
            ]"#,
            "application/json",
        ))
        .mount(server)
        .await;
}

/// Polls the job until the background task lands its terminal write.
async fn wait_for_terminal(service: &GuildListService<'_>, job_id: Uuid) -> GuildFetchJob {
    for _ in 0..100 {
        let job = service
            .poll(job_id)
            .await
            .unwrap()
            .expect("job should exist while polling");
        if !matches!(job.state, GuildFetchJobState::Pending) {
            return job;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("guild fetch job {} never reached a terminal state", job_id);
}
