use super::*;

/// Tests the pending to done transition.
///
/// Expected: Ok, and subsequent reads return the recorded guild list
#[tokio::test]
async fn marks_pending_job_done() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;

    repo.mark_done(id, &sample_guilds()).await?;

    let job = repo.find_by_id(id).await?.unwrap();
    assert_eq!(job.state, GuildFetchJobState::Done(sample_guilds()));

    Ok(())
}

/// Tests that the recorded list preserves ids, names and order.
///
/// Expected: the decoded list matches the written one element for element
#[tokio::test]
async fn preserves_guild_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;
    repo.mark_done(id, &sample_guilds()).await?;

    let job = repo.find_by_id(id).await?.unwrap();
    let GuildFetchJobState::Done(guilds) = job.state else {
        panic!("expected a done job");
    };

    assert_eq!(guilds[0].name, "Guild One");
    assert_eq!(guilds[1].name, "Guild Two");

    Ok(())
}

/// Tests recording an empty guild list.
///
/// A caller in no guilds is a normal outcome, not a failure.
///
/// Expected: Done with an empty list
#[tokio::test]
async fn records_empty_guild_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;
    repo.mark_done(id, &[]).await?;

    let job = repo.find_by_id(id).await?.unwrap();
    assert_eq!(job.state, GuildFetchJobState::Done(vec![]));

    Ok(())
}

/// Tests that the terminal result is stable across repeated reads.
///
/// Expected: two polls after completion observe the identical state
#[tokio::test]
async fn terminal_result_is_stable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;
    repo.mark_done(id, &sample_guilds()).await?;

    let first = repo.find_by_id(id).await?.unwrap();
    let second = repo.find_by_id(id).await?.unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Tests that completion stamps the row.
///
/// Expected: completed_at is set alongside the status flip
#[tokio::test]
async fn sets_completed_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    repo.create(id).await?;
    repo.mark_done(id, &sample_guilds()).await?;

    let row = entity::prelude::GuildFetchJob::find_by_id(id.to_string())
        .one(db)
        .await?
        .unwrap();

    assert_eq!(row.status, STATUS_DONE);
    assert!(row.completed_at.is_some());

    Ok(())
}
