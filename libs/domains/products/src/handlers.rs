//! HTTP handlers for the Products API

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, PageQuery, Product, ProductPage};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(
        schemas(Product, CreateProduct, PageQuery, ProductPage),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products with pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductPage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(page): Query<PageQuery>,
) -> ProductResult<Json<ProductPage>> {
    // Default substitution first, bounds check second: an explicit limit=0
    // is indistinguishable from an unset limit and silently becomes 20.
    let page = page.with_defaults();
    page.validate()
        .map_err(|e| ProductError::Validation(e.to_string()))?;

    let items = service.get(page.limit, page.offset).await?;

    Ok(Json(ProductPage {
        limit: page.limit,
        offset: page.offset,
        items,
    }))
}

/// Create a new product
///
/// Responds with the stored record, read back after the insert so
/// store-assigned fields are populated.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.add(input).await?;
    Ok(Json(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<Product>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}
