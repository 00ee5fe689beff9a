use super::*;

/// Tests the pending to error transition.
///
/// Expected: Ok, and subsequent reads return the failure detail
#[tokio::test]
async fn marks_pending_job_failed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;

    repo.mark_failed(id, "Discord API error (403 Forbidden): missing scope")
        .await?;

    let job = repo.find_by_id(id).await?.unwrap();
    assert_eq!(
        job.state,
        GuildFetchJobState::Failed(
            "Discord API error (403 Forbidden): missing scope".to_string()
        )
    );

    Ok(())
}

/// Tests that the failure detail survives repeated reads unchanged.
///
/// Expected: identical state on every poll after the terminal write
#[tokio::test]
async fn failure_detail_is_stable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;
    repo.mark_failed(id, "upstream unavailable").await?;

    let first = repo.find_by_id(id).await?.unwrap();
    let second = repo.find_by_id(id).await?.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.state,
        GuildFetchJobState::Failed("upstream unavailable".to_string())
    );

    Ok(())
}
