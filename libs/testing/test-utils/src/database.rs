//! Embedded test database
//!
//! Provides a `TestDatabase` helper backed by the embedded SQLite mode the
//! service itself supports, so the suite runs without a container runtime.
//! Migrations are applied through the same `migration::Migrator` the
//! production bootstrap uses.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Test database with schema applied, dropped with the test
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new in-memory test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // An in-memory SQLite database exists per connection; a
        // single-connection pool keeps every query on the same database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let connection = Database::connect(options)
            .await
            .expect("Failed to connect to test database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations on test database");

        tracing::info!("Test database ready (embedded SQLite)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
