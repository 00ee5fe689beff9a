use super::*;

/// Tests looking up a job id that was never created.
///
/// Expected: Ok(None), distinct from a failed job
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = GuildFetchJobRepository::new(db);
    let result = repo.find_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests finding a pending job seeded through the factory.
///
/// Expected: Ok(Some) with pending state
#[tokio::test]
async fn finds_pending_job() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let row = factory::guild_fetch_job::create_job(db).await?;

    let repo = GuildFetchJobRepository::new(db);
    let job = repo
        .find_by_id(Uuid::parse_str(&row.id).unwrap())
        .await?
        .unwrap();

    assert_eq!(job.state, GuildFetchJobState::Pending);
    assert_eq!(job.created_at, row.created_at);

    Ok(())
}

/// Tests decoding a finished job row.
///
/// Expected: Ok(Some) with the guild list decoded from the JSON column
#[tokio::test]
async fn decodes_done_job_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let row = factory::guild_fetch_job::GuildFetchJobFactory::new(db)
        .status(STATUS_DONE)
        .guilds_json(Some(
            r#"[{"id":"111111111","name":"Guild One"},{"id":"222222222","name":"Guild Two"}]"#
                .to_string(),
        ))
        .build()
        .await?;

    let repo = GuildFetchJobRepository::new(db);
    let job = repo
        .find_by_id(Uuid::parse_str(&row.id).unwrap())
        .await?
        .unwrap();

    assert_eq!(job.state, GuildFetchJobState::Done(sample_guilds()));

    Ok(())
}

/// Tests that a done row without a payload is reported as corrupt.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn rejects_done_row_without_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let row = factory::guild_fetch_job::GuildFetchJobFactory::new(db)
        .status(STATUS_DONE)
        .build()
        .await?;

    let repo = GuildFetchJobRepository::new(db);
    let result = repo.find_by_id(Uuid::parse_str(&row.id).unwrap()).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}

/// Tests that an unknown status column value is reported as corrupt.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let row = factory::guild_fetch_job::GuildFetchJobFactory::new(db)
        .status("running")
        .build()
        .await?;

    let repo = GuildFetchJobRepository::new(db);
    let result = repo.find_by_id(Uuid::parse_str(&row.id).unwrap()).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
