//! Products Domain
//!
//! This module provides a complete domain implementation for managing
//! products backed by a relational store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use domain_products::{handlers, PgProductRepository, ProductService};
//!
//! // Connect to the relational store
//! let db = database::postgres::connect("postgres://localhost/mydb").await?;
//!
//! // Create a repository and service
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository);
//!
//! // Create the Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, PageQuery, Product, ProductPage, DEFAULT_PAGE_LIMIT};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
