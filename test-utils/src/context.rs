use std::sync::Arc;

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbErr,
};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Matches the inactivity window of the application's session layer.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// One test's private store: an in-memory SQLite database and, on request, a
/// session persisted in that same database.
///
/// Built by [`TestBuilder`](crate::builder::TestBuilder); each context owns a
/// fresh database, so tests never see each other's documents.
pub struct TestContext {
    /// Connection to the in-memory database holding the requested tables.
    pub db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    /// Opens a new in-memory database and creates `tables` in order.
    pub(crate) async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self { db, session: None })
    }

    /// Owned handle for code that keeps its own connection, such as `AppState`
    /// or the GraphQL schema.
    ///
    /// The clone shares the single in-memory connection, so rows written through
    /// either handle are visible through the other.
    pub fn connection(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Session backed by a `SqliteStore` in the test database.
    ///
    /// The store's table is created on first call; later calls return the same
    /// session, so values inserted by one step are visible to the next.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The test session
    /// - `Err(TestError::Database)` - Failed to create the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                let store = SqliteStore::new(self.db.get_sqlite_connection_pool().clone());
                store
                    .migrate()
                    .await
                    .map_err(|e| DbErr::Custom(e.to_string()))?;

                Session::new(
                    None,
                    Arc::new(store),
                    Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
                )
            }
        };

        Ok(self.session.insert(session))
    }
}
