//! # Products Client SDK
//!
//! A typed Rust client for the product catalog API.

use products_types::{CreateProductRequest, ProductResponse};
use reqwest::{Client, StatusCode, Url};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Products API client.
pub struct ProductsClient {
    base_url: String,
    http: Client,
}

impl ProductsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(self.endpoint(&["health"])?).send().await?;
        Ok(resp.status().is_success())
    }

    /// Creates a new product.
    pub async fn create_product(
        &self,
        code: &str,
        name: &str,
        price_eur: Decimal,
        is_available: bool,
    ) -> Result<ProductResponse, ClientError> {
        let req = CreateProductRequest::new(code, name, price_eur, is_available);
        let resp = self
            .http
            .post(self.endpoint(&["products"])?)
            .json(&req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Gets a product by code.
    pub async fn get_product(&self, code: &str) -> Result<ProductResponse, ClientError> {
        let resp = self
            .http
            .get(self.endpoint(&["products", code])?)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Lists all products. An empty catalog yields an empty vector.
    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, ClientError> {
        let resp = self.http.get(self.endpoint(&["products"])?).send().await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        self.handle_response(resp).await
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    ///
    /// Product codes may contain `/`, `?` or `#`, so they cannot be
    /// formatted into the path verbatim.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            // Error bodies are plain text, except validation failures which
            // are a JSON map and are passed through verbatim.
            let message = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
