//! Product domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::ExchangeRate;
use crate::error::DomainError;

/// Number of characters every product code must have.
pub const CODE_LENGTH: usize = 10;

/// Store-assigned identifier for a Product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw database identifier.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw database identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique business identifier of a product.
///
/// Always exactly [`CODE_LENGTH`] characters and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// Validates and wraps a product code.
    pub fn parse(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::BlankCode);
        }

        let length = code.chars().count();
        if length != CODE_LENGTH {
            return Err(DomainError::CodeLength {
                expected: CODE_LENGTH,
                actual: length,
            });
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A validated product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: ProductCode,
    pub name: String,
    pub price_eur: Decimal,
    pub is_available: bool,
}

impl NewProduct {
    /// Creates a new product.
    ///
    /// # Validation
    /// - Name cannot be blank
    /// - EUR price cannot be negative
    pub fn new(
        code: ProductCode,
        name: String,
        price_eur: Decimal,
        is_available: bool,
    ) -> Result<Self, DomainError> {
        validate_name(&name)?;
        validate_price(price_eur)?;

        Ok(Self {
            code,
            name,
            price_eur,
            is_available,
        })
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::BlankName);
    }
    Ok(())
}

pub(crate) fn validate_price(price_eur: Decimal) -> Result<(), DomainError> {
    if price_eur < Decimal::ZERO {
        return Err(DomainError::NegativePrice);
    }
    Ok(())
}

/// A persisted product.
///
/// Only the EUR price is stored; the USD price is derived on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: ProductId,
    /// Unique business code
    pub code: ProductCode,
    /// Display name
    pub name: String,
    /// Authoritative price in EUR
    pub price_eur: Decimal,
    /// Whether the product can currently be ordered
    pub is_available: bool,
}

impl Product {
    /// Reconstructs a product from stored fields.
    pub fn from_parts(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            code: new.code,
            name: new.name,
            price_eur: new.price_eur,
            is_available: new.is_available,
        }
    }

    /// Attaches the USD price computed from `rate`.
    pub fn priced(self, rate: &ExchangeRate) -> Result<PricedProduct, DomainError> {
        let price_usd = rate.convert(self.price_eur)?;
        Ok(PricedProduct::new(self, price_usd))
    }
}

/// A product together with its USD price for the current rate.
///
/// This is a response-only view; `price_usd` never reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub product: Product,
    pub price_usd: Decimal,
}

impl PricedProduct {
    pub fn new(product: Product, price_usd: Decimal) -> Self {
        Self { product, price_usd }
    }
}
