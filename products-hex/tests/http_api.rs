//! HTTP-level tests for the products API.
//!
//! Requests go through the full router (metrics and trace layers included)
//! against the in-memory repository and a fixed or failing rate provider.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use exchange_rates::FixedRate;
use products_hex::{ProductService, inbound::HttpServer};
use products_repo::InMemoryRepo;
use products_types::{ExchangeError, ExchangeRate, ExchangeRateProvider};

/// Rate provider standing in for an unreachable HNB API.
struct UnreachableRates;

#[async_trait]
impl ExchangeRateProvider for UnreachableRates {
    async fn get_eur_to_usd_rate(&self) -> Result<ExchangeRate, ExchangeError> {
        Err(ExchangeError::Request("connection refused".into()))
    }
}

fn app() -> Router {
    let service = ProductService::new(InMemoryRepo::new(), FixedRate::new(dec!(1.1)));
    HttpServer::new(service).router()
}

fn failing_app() -> Router {
    let service = ProductService::new(InMemoryRepo::new(), UnreachableRates);
    HttpServer::new(service).router()
}

fn create_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/products")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Digits of a JSON number exactly as they were written on the wire.
fn number(value: &serde_json::Value) -> String {
    assert!(value.is_number(), "expected a JSON number, got {}", value);
    value.to_string()
}

const WIDGET: &str =
    r#"{"code":"ABCDE12345","name":"Widget","priceEur":10.00,"isAvailable":true}"#;

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = app()
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/products/{code}"].is_object());
}

#[tokio::test]
async fn test_create_returns_201_with_usd_price() {
    let response = app().oneshot(create_request(WIDGET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ABCDE12345");
    assert_eq!(json["name"], "Widget");
    assert_eq!(number(&json["priceEur"]), "10.00");
    assert_eq!(number(&json["priceUsd"]), "11.000");
    assert_eq!(json["isAvailable"], true);
}

#[tokio::test]
async fn test_create_accepts_numeric_price_and_defaults_availability() {
    let response = app()
        .oneshot(create_request(
            r#"{"code":"ABCDE12345","name":"Widget","priceEur":4}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(number(&json["priceUsd"]), "4.4");
    assert_eq!(json["isAvailable"], false);
}

#[tokio::test]
async fn test_prices_are_json_numbers_with_exact_digits() {
    let response = app()
        .oneshot(create_request(
            r#"{"code":"ABCDE12345","name":"Widget","priceEur":0.1000000000000000000000000001}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let text = body_text(response).await;
    assert!(
        text.contains(r#""priceEur":0.1000000000000000000000000001,"#),
        "{}",
        text
    );
    assert!(!text.contains(r#""priceUsd":""#), "{}", text);
}

#[tokio::test]
async fn test_create_with_both_availability_spellings_returns_400() {
    let response = app()
        .oneshot(create_request(
            r#"{"code":"ABCDE12345","name":"Widget","priceEur":1,"isAvailable":true,"available":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["isAvailable"],
        "Specify either isAvailable or available, not both"
    );
    assert!(json.get("body").is_none());
}

#[tokio::test]
async fn test_create_duplicate_returns_409() {
    let app = app();
    let first = app.clone().oneshot(create_request(WIDGET)).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(create_request(WIDGET)).await.unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_text(second).await,
        "Product with code ABCDE12345 already exists."
    );
}

#[tokio::test]
async fn test_create_invalid_fields_returns_400_map() {
    let response = app()
        .oneshot(create_request(r#"{"code":"SHORT","name":"  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "Code must be exactly 10 characters long");
    assert_eq!(json["name"], "Name cannot be empty");
    assert_eq!(json["priceEur"], "Price must be specified");
}

#[tokio::test]
async fn test_create_negative_price_returns_400() {
    let response = app()
        .oneshot(create_request(
            r#"{"code":"ABCDE12345","name":"Widget","priceEur":"-1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["priceEur"], "Price cannot be negative");
}

#[tokio::test]
async fn test_create_malformed_body_returns_400() {
    let response = app().oneshot(create_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["body"].is_string());
}

#[tokio::test]
async fn test_create_rate_failure_returns_500_and_saves_nothing() {
    let app = failing_app();

    let response = app.clone().oneshot(create_request(WIDGET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body_text(response)
            .await
            .starts_with("Failed to create product: ")
    );

    // Listing also needs a rate, so an empty store still answers 500 here.
    let list = app.oneshot(get_request("/products")).await.unwrap();
    assert_eq!(list.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body_text(list)
            .await
            .starts_with("Failed to fetch products: ")
    );
}

#[tokio::test]
async fn test_get_returns_priced_product() {
    let app = app();
    app.clone().oneshot(create_request(WIDGET)).await.unwrap();

    let response = app.oneshot(get_request("/products/ABCDE12345")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ABCDE12345");
    assert_eq!(number(&json["priceUsd"]), "11.000");
}

#[tokio::test]
async fn test_get_unknown_code_returns_404() {
    let response = app()
        .oneshot(get_request("/products/ZZZZZ99999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response).await,
        "Product with code ZZZZZ99999 not found."
    );
}

#[tokio::test]
async fn test_get_malformed_code_returns_404() {
    let response = app().oneshot(get_request("/products/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Product with code abc not found.");
}

#[tokio::test]
async fn test_list_empty_returns_204() {
    let response = app().oneshot(get_request("/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_list_returns_all_products_in_creation_order() {
    let app = app();
    for body in [
        WIDGET,
        r#"{"code":"FGHIJ67890","name":"Gadget","priceEur":"2","isAvailable":false}"#,
    ] {
        let response = app.clone().oneshot(create_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["code"], "ABCDE12345");
    assert_eq!(items[1]["code"], "FGHIJ67890");
    assert_eq!(number(&items[1]["priceUsd"]), "2.2");
}
