use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment over a private in-memory SQLite database.
///
/// Every context connects its own database, so tests never observe each
/// other's rows. Tests exercising the identity boundary can additionally
/// request a session backed by the same database.
pub struct TestContext {
    /// Connection to this context's in-memory database.
    pub db: DatabaseConnection,

    /// Session created on first `session()` call.
    session: Option<Session>,
}

impl TestContext {
    /// Connects a fresh in-memory SQLite database.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db, session: None })
    }

    /// Applies the given CREATE TABLE statements to the database.
    ///
    /// Tests normally configure their tables through `TestBuilder` rather
    /// than calling this directly.
    pub async fn create_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating it on first use.
    ///
    /// The session store is migrated into the same in-memory database,
    /// mirroring how the application layers its session store over the
    /// application database. Repeated calls return the same session.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let pool = self.db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }
}
