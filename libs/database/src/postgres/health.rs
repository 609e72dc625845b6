use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check relational store health
///
/// Executes a simple `SELECT 1` to verify the connection is working.
/// Useful for readiness and liveness probes.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running database health check");

    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("Health check failed: {}", e)))?;

    debug!("Database health check passed");
    Ok(())
}

/// Read the store's current timestamp
///
/// Performs a full round trip to the store and returns its clock reading as
/// text. `CURRENT_TIMESTAMP` (cast to text) is understood by both PostgreSQL
/// and the embedded SQLite backend.
pub async fn current_timestamp(db: &DatabaseConnection) -> Result<String, DatabaseError> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        "SELECT CAST(CURRENT_TIMESTAMP AS TEXT)".to_owned(),
    );

    let row = db
        .query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("Timestamp query failed: {}", e)))?
        .ok_or_else(|| {
            DatabaseError::HealthCheckFailed("Timestamp query returned no rows".to_string())
        })?;

    row.try_get_by_index::<String>(0)
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("Timestamp decode failed: {}", e)))
}
