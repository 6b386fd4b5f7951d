//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, fixed-rate providers, etc.

use std::sync::Arc;

use crate::domain::ExchangeRate;

/// Error type for exchange rate operations.
///
/// Every variant is fatal to the calling operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Exchange rate request failed: {0}")]
    Request(String),

    #[error("Exchange rate response body is empty")]
    EmptyBody,

    #[error("Failed to parse exchange rate JSON: {0}")]
    InvalidJson(String),

    #[error("No data found in exchange rate JSON")]
    NoData,

    #[error("Exchange rate JSON is missing field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid exchange rate value: {0}")]
    InvalidRate(String),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Fetches the current EUR→USD rate.
    async fn get_eur_to_usd_rate(&self) -> Result<ExchangeRate, ExchangeError>;
}

#[async_trait::async_trait]
impl<T: ExchangeRateProvider + ?Sized> ExchangeRateProvider for Arc<T> {
    async fn get_eur_to_usd_rate(&self) -> Result<ExchangeRate, ExchangeError> {
        (**self).get_eur_to_usd_rate().await
    }
}
