//! Handler tests for the Products domain
//!
//! These tests drive the domain router over HTTP semantics:
//! - request deserialization and validation
//! - response serialization
//! - status codes and error bodies
//!
//! Unlike end-to-end tests they exercise only the products routes, not the
//! full application wiring.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

// Helper to parse a JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn test_app() -> Router {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let service = ProductService::new(repo);
    handlers::router(service)
}

fn post_product(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_product_returns_200_with_assigned_id() {
    let app = test_app().await;

    let response = app
        .oneshot(post_product(json!({
            "name": "Widget",
            "price": 9.99,
            "available": true
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 9.99);
    assert!(product.available);
}

#[tokio::test]
async fn test_create_then_get_returns_identical_body() {
    let app = test_app().await;

    let create_response = app
        .clone()
        .oneshot(post_product(json!({
            "name": "Widget",
            "price": 9.99,
            "available": true
        })))
        .await
        .unwrap();
    assert_eq!(create_response.status(), StatusCode::OK);
    let created: Product = json_body(create_response.into_body()).await;

    let get_response = app.oneshot(get(&format!("/{}", created.id))).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);
    let fetched: Product = json_body(get_response.into_body()).await;

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_product_validates_input() {
    let app = test_app().await;

    // Empty name
    let response = app
        .clone()
        .oneshot(post_product(json!({
            "name": "",
            "price": 9.99,
            "available": true
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Negative price
    let response = app
        .oneshot(post_product(json!({
            "name": "Widget",
            "price": -1.0,
            "available": true
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_rejects_malformed_json() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_nonexistent_returns_404() {
    let app = test_app().await;

    let response = app.oneshot(get("/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_get_product_non_numeric_id_returns_400() {
    let app = test_app().await;

    let response = app.oneshot(get("/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_returns_page_envelope() {
    let app = test_app().await;

    for i in 0..3 {
        let response = app
            .clone()
            .oneshot(post_product(json!({
                "name": format!("Widget {}", i),
                "price": 1.0 + i as f64,
                "available": true
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/?limit=2&offset=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: Value = json_body(response.into_body()).await;
    assert_eq!(page["limit"], 2);
    assert_eq!(page["offset"], 0);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_products_offset_does_not_repeat_items() {
    let app = test_app().await;

    for i in 0..4 {
        app.clone()
            .oneshot(post_product(json!({
                "name": format!("Widget {}", i),
                "price": 1.0,
                "available": true
            })))
            .await
            .unwrap();
    }

    let first: Value = json_body(
        app.clone()
            .oneshot(get("/?limit=2&offset=0"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let second: Value = json_body(
        app.oneshot(get("/?limit=2&offset=2"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let first_ids: Vec<i64> = first["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    let second_ids: Vec<i64> = second["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();

    assert_eq!(first_ids, vec![1, 2]);
    assert_eq!(second_ids, vec![3, 4]);
}

#[tokio::test]
async fn test_list_products_zero_limit_behaves_like_unset() {
    let app = test_app().await;

    app.clone()
        .oneshot(post_product(json!({
            "name": "Widget",
            "price": 9.99,
            "available": true
        })))
        .await
        .unwrap();

    let explicit_zero: Value = json_body(
        app.clone()
            .oneshot(get("/?limit=0"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let unset: Value = json_body(app.oneshot(get("/")).await.unwrap().into_body()).await;

    // Explicit limit=0 is silently overwritten to the default
    assert_eq!(explicit_zero["limit"], 20);
    assert_eq!(explicit_zero, unset);
}

#[tokio::test]
async fn test_list_products_rejects_out_of_range_bounds() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/?limit=101")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/?offset=101")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_rejects_non_numeric_params() {
    let app = test_app().await;

    let response = app.oneshot(get("/?limit=abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_scenario_create_get_miss() {
    let app = test_app().await;

    // Create the first product
    let create_response = app
        .clone()
        .oneshot(post_product(json!({
            "name": "Widget",
            "price": 9.99,
            "available": true
        })))
        .await
        .unwrap();
    assert_eq!(create_response.status(), StatusCode::OK);
    let created: Product = json_body(create_response.into_body()).await;
    assert_eq!(created.id, 1);

    // Fetch it back
    let get_response = app.clone().oneshot(get("/1")).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);
    let fetched: Product = json_body(get_response.into_body()).await;
    assert_eq!(fetched, created);

    // Miss on an id that was never assigned
    let miss_response = app.oneshot(get("/999")).await.unwrap();
    assert_eq!(miss_response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(miss_response.into_body()).await;
    assert_eq!(body["message"], "Product not found");
}
