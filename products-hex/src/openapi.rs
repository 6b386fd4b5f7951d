//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use products_types::dto::{CreateProductRequest, ProductResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create a product
///
/// The USD price is computed from the EUR price with the rate fetched for
/// this request.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed; field to message map", body = inline(serde_json::Value),
            example = json!({"code": "Code must be exactly 10 characters long"})),
        (status = 409, description = "A product with this code already exists", body = String),
        (status = 500, description = "Exchange rate unavailable or store failure", body = String)
    )
)]
async fn create_product() {}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products, priced with one rate", body = Vec<ProductResponse>),
        (status = 204, description = "No products exist"),
        (status = 500, description = "Exchange rate unavailable or store failure", body = String)
    )
)]
async fn list_products() {}

/// Get a product by code
#[utoipa::path(
    get,
    path = "/products/{code}",
    tag = "products",
    params(
        ("code" = String, Path, description = "10-character product code")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = String,
            example = json!("Product with code ABCDE12345 not found.")),
        (status = 500, description = "Exchange rate unavailable or store failure", body = String)
    )
)]
async fn get_product() {}

/// OpenAPI documentation for the Products API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "Products priced in EUR, with USD prices converted at the current HNB middle rate.",
        license(name = "MIT"),
    ),
    paths(health, create_product, list_products, get_product),
    components(schemas(CreateProductRequest, ProductResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Product catalog operations"),
    )
)]
pub struct ApiDoc;
