//! Fixed-rate provider.

use async_trait::async_trait;
use rust_decimal::Decimal;

use products_types::{ExchangeError, ExchangeRate, ExchangeRateProvider};

/// Provider that always answers with the same rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedRate(ExchangeRate);

impl FixedRate {
    pub fn new(rate: Decimal) -> Self {
        Self(ExchangeRate::new(rate))
    }
}

#[async_trait]
impl ExchangeRateProvider for FixedRate {
    async fn get_eur_to_usd_rate(&self) -> Result<ExchangeRate, ExchangeError> {
        Ok(self.0)
    }
}
