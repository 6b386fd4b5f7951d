//! Domain models for the product catalog.

pub mod product;
pub mod rate;

pub use product::{CODE_LENGTH, NewProduct, PricedProduct, Product, ProductCode, ProductId};
pub use rate::ExchangeRate;
