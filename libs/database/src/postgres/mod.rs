//! Relational store connector and utilities
//!
//! Provides connection management, migration running, and health helpers.
//! The backend is selected by the connection URL scheme, so the same
//! connector serves PostgreSQL deployments and the embedded SQLite mode.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    connect_with_retry, run_migrations,
};
pub use health::{check_health, current_timestamp};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
