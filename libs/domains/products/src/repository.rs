use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return the store-assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<i32>;

    /// List up to `limit` products starting at `offset`, in primary-key order
    async fn find_all(&self, limit: u64, offset: u64) -> ProductResult<Vec<Product>>;

    /// Get a product by id
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;
}
