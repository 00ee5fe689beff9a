use voiceboard::{config::Config, error::AppError, router, scheduler, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting server");

    // Reclaim old fetch jobs in the background
    let sweeper_db = db.clone();
    let retention = config.job_retention;
    tokio::spawn(async move {
        if let Err(e) = scheduler::job_retention::start_scheduler(sweeper_db, retention).await {
            tracing::error!("Job retention scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, http_client, config.discord.clone()))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
