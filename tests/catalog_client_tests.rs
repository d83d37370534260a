//! Integration Tests for the HTTP catalog client
//!
//! Runs a throwaway catalog on an ephemeral local port and points the
//! reqwest-backed client at it.

use std::time::Duration;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use price_compare::{
    catalog::{CatalogClient, HttpCatalogClient},
    models::ProductSummary,
    CatalogError,
};
use serde_json::json;

// == Fake Catalog Server ==

async fn product(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({
            "id": 1,
            "title": "Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://img.test/1.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }))
        .into_response(),
        "2" => Json(json!({"id": 2, "price": 22.3})).into_response(),
        // Unknown IDs come back as 200 with an empty body
        "404" => StatusCode::OK.into_response(),
        _ => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

async fn products() -> Json<serde_json::Value> {
    Json(json!([
        {
            "id": 1,
            "title": "Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://img.test/1.jpg"
        },
        {
            "id": 2,
            "title": "T-Shirt",
            "price": 22.3,
            "description": "Slim fit",
            "category": "men's clothing",
            "image": "https://img.test/2.jpg"
        }
    ]))
}

async fn spawn_catalog(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> HttpCatalogClient {
    let router = Router::new()
        .route("/products", get(products))
        .route("/products/:id", get(product));
    let base_url = spawn_catalog(router).await;
    HttpCatalogClient::new(base_url, Duration::from_secs(5)).unwrap()
}

// == Tests ==

#[tokio::test]
async fn test_fetch_by_id() {
    let client = client().await;

    let summary = client.fetch_by_id(1).await.unwrap();
    assert_eq!(summary, ProductSummary::new(1, 109.95));

    let summary = client.fetch_by_id(2).await.unwrap();
    assert_eq!(summary, ProductSummary::new(2, 22.3));
}

#[tokio::test]
async fn test_fetch_all() {
    let client = client().await;

    let products = client.fetch_all().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].title, "T-Shirt");
    assert_eq!(products[0].price, 109.95);
}

#[tokio::test]
async fn test_non_success_status() {
    let client = client().await;

    let err = client.fetch_by_id(7).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_empty_body_is_decode_error() {
    let client = client().await;

    let err = client.fetch_by_id(404).await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode { .. }));
}

#[tokio::test]
async fn test_listing_non_success_status() {
    let router = Router::new().route(
        "/products",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_catalog(router).await;
    let client = HttpCatalogClient::new(base_url, Duration::from_secs(5)).unwrap();

    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_slow_catalog_times_out() {
    let router = Router::new().route(
        "/products/:id",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"id": 1, "price": 1.0}))
        }),
    );
    let base_url = spawn_catalog(router).await;
    let client = HttpCatalogClient::new(base_url, Duration::from_millis(100)).unwrap();

    let err = client.fetch_by_id(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(ref e) if e.is_timeout()));
}
