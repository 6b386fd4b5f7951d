//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use products_types::{
    AppError, CreateProductRequest, ExchangeRateProvider, ProductRepository, ProductResponse,
    ValidationErrors,
};

use crate::ProductService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: ProductRepository, X: ExchangeRateProvider> {
    pub service: ProductService<R, X>,
}

/// Which endpoint produced an error; selects the 500 message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Fetch,
    List,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Create => "Failed to create product",
            Operation::Fetch => "Failed to fetch product",
            Operation::List => "Failed to fetch products",
        }
    }
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError {
    pub operation: Operation,
    pub error: AppError,
}

impl ApiError {
    pub fn new(operation: Operation, error: AppError) -> Self {
        Self { operation, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.error {
            AppError::Validation(errors) => {
                tracing::warn!(%errors, "Rejected invalid input");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            err @ AppError::NotFound(_) => {
                tracing::warn!("{}", err);
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            err @ AppError::Conflict(_) => {
                tracing::warn!("{}", err);
                (StatusCode::CONFLICT, err.to_string()).into_response()
            }
            err @ (AppError::ExchangeRateUnavailable(_) | AppError::Internal(_)) => {
                let message = format!("{}: {}", self.operation.failure_prefix(), err);
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

/// Turns a body that is not a JSON product into a field-level error.
fn rejected_body(rejection: JsonRejection) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add("body", rejection.body_text());
    AppError::Validation(errors)
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Create a product.
#[tracing::instrument(skip(state, payload))]
pub async fn create_product<R: ProductRepository, X: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, X>>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let fail = |e| ApiError::new(Operation::Create, e);

    let Json(req) = payload.map_err(|r| fail(rejected_body(r)))?;
    let product = state.service.create_product(req).await.map_err(fail)?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Get product by code.
#[tracing::instrument(skip(state))]
pub async fn get_product<R: ProductRepository, X: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, X>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .service
        .get_product_by_code(&code)
        .await
        .map_err(|e| ApiError::new(Operation::Fetch, e))?;

    Ok(Json(ProductResponse::from(product)))
}

/// List all products; an empty catalog answers 204 No Content.
#[tracing::instrument(skip(state))]
pub async fn list_products<R: ProductRepository, X: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, X>>>,
) -> Result<Response, ApiError> {
    let products = state
        .service
        .get_all_products()
        .await
        .map_err(|e| ApiError::new(Operation::List, e))?;

    if products.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(body).into_response())
}
