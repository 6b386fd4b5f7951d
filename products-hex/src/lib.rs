//! # Products Hex
//!
//! Application service layer and HTTP adapter for the product catalog.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates repository and rate provider)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the HTTP adapter
//!
//! The service is generic over `R: ProductRepository` and
//! `X: ExchangeRateProvider`, allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ProductService;
