//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations; there are no business rules beyond existence checks.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product.
    ///
    /// The insert returns only the assigned id, so the canonical stored row
    /// is read back with a second round trip. The two steps are not wrapped
    /// in a transaction; a crash in between leaves the row persisted but
    /// unreturned.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn add(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let id = self.repository.create(input).await?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products with pagination
    #[instrument(skip(self))]
    pub async fn get(&self, limit: u64, offset: u64) -> ProductResult<Vec<Product>> {
        self.repository.find_all(limit, offset).await
    }

    /// Get a product by id
    ///
    /// Translates the store's "no rows" into the typed not-found sentinel;
    /// every other store failure passes through unchanged.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn widget_input() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
            available: true,
        }
    }

    #[tokio::test]
    async fn test_add_rereads_created_row() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo.expect_create().returning(|_| Ok(1));
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| {
                Ok(Some(Product {
                    id: 1,
                    name: "Widget".to_string(),
                    price: 9.99,
                    available: true,
                }))
            });

        let service = ProductService::new(mock_repo);
        let product = service.add(widget_input()).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert!(product.available);
    }

    #[tokio::test]
    async fn test_add_surfaces_vanished_row_as_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo.expect_create().returning(|_| Ok(7));
        mock_repo
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.add(widget_input()).await;

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_input_before_store_access() {
        // No expectations set: any repository call would panic the test
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service
            .add(CreateProduct {
                name: String::new(),
                price: 9.99,
                available: true,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_passes_pagination_through() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_all()
            .with(eq(20), eq(0))
            .returning(|_, _| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let products = service.get(20, 0).await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_translates_missing_row_to_sentinel() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_by_id(999).await;

        assert!(matches!(result, Err(ProductError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_get_by_id_passes_other_errors_through() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(ProductError::Database("connection reset".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.get_by_id(1).await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }
}
