//! Initialization of the database, session layer and HTTP client.

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before the application touches it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application database.
///
/// The auth layer writes the caller identity into this store; this service
/// only reads it back. Sessions ride a Lax same-site cookie, so they are
/// sent on normal navigations but not on cross-site subrequests.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for Discord API calls.
///
/// Redirects are disabled so a response can never steer the caller's
/// bearer token to another origin.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
