/// Unified database error type for all database operations
///
/// This provides a consistent error interface regardless of the backend.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SeaORM errors from the relational store
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Generic(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
