//! Liveness and readiness endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::{
    server::{run_health_checks, HealthCheckFuture},
    AppError,
};
use serde_json::Value;

use crate::state::AppState;

/// Liveness probe with a store round trip
///
/// Responds with the database's own clock reading, so a 200 proves
/// end-to-end connectivity rather than just a running process.
async fn ping(State(state): State<AppState>) -> Result<Json<String>, AppError> {
    let db_time = database::postgres::current_timestamp(&state.db)
        .await
        .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(format!("OK {}", db_time)))
}

/// Readiness probe aggregating dependency checks
async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/ready", get(ready))
        .with_state(state)
}
