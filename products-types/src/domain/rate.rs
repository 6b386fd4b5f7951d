//! EUR→USD exchange rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// How many USD one EUR buys at the moment the rate was fetched.
///
/// A rate lives for a single request; it is never cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Converts an EUR amount to USD.
    ///
    /// Uses exact decimal multiplication; no rounding is applied.
    pub fn convert(&self, price_eur: Decimal) -> Result<Decimal, DomainError> {
        price_eur
            .checked_mul(self.0)
            .ok_or(DomainError::PriceOverflow)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_convert() {
        let rate = ExchangeRate::new(dec!(1.5));
        assert_eq!(rate.convert(dec!(20)).unwrap(), dec!(30.0));
    }

    #[test]
    fn test_zero_rate_yields_zero() {
        let rate = ExchangeRate::new(dec!(0));
        assert_eq!(rate.convert(dec!(10)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_convert_keeps_full_precision() {
        let rate = ExchangeRate::new(dec!(1.0823));
        assert_eq!(rate.convert(dec!(19.99)).unwrap(), dec!(21.635177));
    }

    #[test]
    fn test_overflow_is_reported() {
        let rate = ExchangeRate::new(dec!(2));
        assert!(matches!(
            rate.convert(Decimal::MAX),
            Err(DomainError::PriceOverflow)
        ));
    }
}
