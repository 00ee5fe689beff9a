use super::*;

/// Tests creating a new job.
///
/// Verifies that the repository inserts a pending row and returns the
/// matching domain model.
///
/// Expected: Ok with a pending job carrying the requested id
#[tokio::test]
async fn creates_pending_job() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    let repo = GuildFetchJobRepository::new(db);
    let job = repo.create(id).await?;

    assert_eq!(job.id, id);
    assert_eq!(job.state, GuildFetchJobState::Pending);

    Ok(())
}

/// Tests that a created job is stored with the pending status column.
///
/// Expected: row exists with status "pending" and no payload
#[tokio::test]
async fn stores_pending_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let id = Uuid::new_v4();
    GuildFetchJobRepository::new(db).create(id).await?;

    let row = entity::prelude::GuildFetchJob::find_by_id(id.to_string())
        .one(db)
        .await?
        .unwrap();

    assert_eq!(row.status, STATUS_PENDING);
    assert!(row.guilds.is_none());
    assert!(row.error.is_none());
    assert!(row.completed_at.is_none());

    Ok(())
}

/// Tests that each created job gets its own row.
///
/// Expected: two creates yield two distinct rows
#[tokio::test]
async fn creates_distinct_rows_per_job() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildFetchJob)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = GuildFetchJobRepository::new(db);
    repo.create(Uuid::new_v4()).await?;
    repo.create(Uuid::new_v4()).await?;

    let rows = entity::prelude::GuildFetchJob::find().all(db).await?;

    assert_eq!(rows.len(), 2);

    Ok(())
}
