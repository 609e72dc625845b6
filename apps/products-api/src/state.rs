//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
///
/// Cloned for each handler (inexpensive Arc clones), providing access to the
/// configuration and the store connection pool. The pool's concurrency
/// safety is the store client's business; no locking happens here.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Relational store connection pool
    pub db: DatabaseConnection,
}
