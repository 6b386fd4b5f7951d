//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Wire names are camelCase. Decimals are written as JSON numbers with their
//! exact digits preserved; numbers and strings are both accepted on input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::{validate_name, validate_price};
use crate::domain::{NewProduct, PricedProduct, ProductCode};
use crate::error::{DomainError, ValidationErrors};

/// Message for a body that sets both availability spellings.
pub const AMBIGUOUS_AVAILABILITY: &str = "Specify either isAvailable or available, not both";

// ─────────────────────────────────────────────────────────────────────────────
// Product DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new product.
///
/// Fields are optional on the wire so that missing values are reported as
/// field-level validation errors rather than as a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Unique product code, exactly 10 characters
    #[schema(example = "ABCDE12345")]
    #[serde(default)]
    pub code: Option<String>,
    /// Product name
    #[schema(example = "Espresso machine")]
    #[serde(default)]
    pub name: Option<String>,
    /// Price in EUR, non-negative
    #[schema(value_type = Option<f64>, example = 199.99)]
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_eur: Option<Decimal>,
    /// Whether the product can be ordered; defaults to `false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    /// Alternative spelling of `isAvailable`; sending both is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl CreateProductRequest {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price_eur: Decimal,
        is_available: bool,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
            price_eur: Some(price_eur),
            is_available: Some(is_available),
            available: None,
        }
    }

    /// Validates every field and builds the domain value.
    ///
    /// All failing fields are reported at once, keyed by their wire name.
    pub fn into_new_product(self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let code = ProductCode::parse(self.code.unwrap_or_default())
            .map_err(|e| errors.add("code", e.to_string()))
            .ok();

        let name = self.name.unwrap_or_default();
        if let Err(e) = validate_name(&name) {
            errors.add("name", e.to_string());
        }

        let price_eur = match self.price_eur {
            Some(price) => validate_price(price)
                .map(|()| price)
                .map_err(|e| errors.add("priceEur", e.to_string()))
                .ok(),
            None => {
                errors.add("priceEur", DomainError::MissingPrice.to_string());
                None
            }
        };

        let is_available = match (self.is_available, self.available) {
            (Some(_), Some(_)) => {
                errors.add("isAvailable", AMBIGUOUS_AVAILABILITY);
                false
            }
            (flag, alias) => flag.or(alias).unwrap_or(false),
        };

        match (code, price_eur) {
            (Some(code), Some(price_eur)) if errors.is_empty() => Ok(NewProduct {
                code,
                name,
                price_eur,
                is_available,
            }),
            _ => Err(errors),
        }
    }
}

/// Product representation returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = "ABCDE12345")]
    pub code: String,
    #[schema(example = "Espresso machine")]
    pub name: String,
    /// Stored price in EUR
    #[schema(value_type = f64, example = 199.99)]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price_eur: Decimal,
    /// EUR price converted with the rate fetched for this response
    #[schema(value_type = f64, example = 216.449177)]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price_usd: Decimal,
    pub is_available: bool,
}

impl From<PricedProduct> for ProductResponse {
    fn from(priced: PricedProduct) -> Self {
        let PricedProduct { product, price_usd } = priced;
        Self {
            code: product.code.into(),
            name: product.name,
            price_eur: product.price_eur,
            price_usd,
            is_available: product.is_available,
        }
    }
}
