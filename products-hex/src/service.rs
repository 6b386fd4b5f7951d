//! Product Application Service
//!
//! Orchestrates the repository and exchange-rate ports.
//! Contains NO infrastructure logic - pure business orchestration.

use products_types::{
    AppError, CreateProductRequest, ExchangeRate, ExchangeRateProvider, PricedProduct,
    ProductCode, ProductRepository,
};

/// Application service for product operations.
///
/// Generic over the repository and the rate provider - adapters are injected
/// at compile time. The rate is fetched fresh for every operation that
/// returns a USD price; it is never cached.
pub struct ProductService<R: ProductRepository, X: ExchangeRateProvider> {
    repo: R,
    rates: X,
}

impl<R: ProductRepository, X: ExchangeRateProvider> ProductService<R, X> {
    /// Creates a new product service.
    pub fn new(repo: R, rates: X) -> Self {
        Self { repo, rates }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying rate provider.
    pub fn rates(&self) -> &X {
        &self.rates
    }

    async fn current_rate(&self) -> Result<ExchangeRate, AppError> {
        let rate = self.rates.get_eur_to_usd_rate().await?;
        Ok(rate)
    }

    /// Creates a product and returns it priced in USD.
    ///
    /// Input is validated before any side effect. If the rate cannot be
    /// fetched nothing is saved.
    pub async fn create_product(&self, req: CreateProductRequest) -> Result<PricedProduct, AppError> {
        let product = req.into_new_product().map_err(AppError::Validation)?;

        let rate = self.current_rate().await?;
        let price_usd = rate.convert(product.price_eur)?;

        let saved = self.repo.save(product).await?;
        tracing::info!(code = %saved.code, id = %saved.id, %rate, "Product created");

        Ok(PricedProduct::new(saved, price_usd))
    }

    /// Gets a product by code, priced at the current rate.
    pub async fn get_product_by_code(&self, code: &str) -> Result<PricedProduct, AppError> {
        let not_found = || AppError::NotFound(code.to_string());

        // A malformed code cannot match any stored product.
        let code = ProductCode::parse(code).map_err(|_| not_found())?;
        let product = self.repo.find_by_code(&code).await?.ok_or_else(not_found)?;

        let rate = self.current_rate().await?;
        Ok(product.priced(&rate)?)
    }

    /// Lists all products, priced with a single rate snapshot.
    ///
    /// The rate is fetched exactly once per call, even when there are no
    /// products.
    pub async fn get_all_products(&self) -> Result<Vec<PricedProduct>, AppError> {
        let rate = self.current_rate().await?;
        let products = self.repo.find_all().await?;

        products
            .into_iter()
            .map(|p| p.priced(&rate).map_err(AppError::from))
            .collect()
    }
}
