//! # Exchange Rates
//!
//! Adapters implementing the `ExchangeRateProvider` port:
//! - [`HnbClient`] - fetches the EUR→USD middle rate from the Croatian
//!   National Bank (HNB) exchange-rate API
//! - [`FixedRate`] - always returns the same rate (offline development, tests)
//!
//! # Example
//! ```
//! use exchange_rates::parse_rate;
//!
//! let body = r#"[{"valuta":"USD","srednji_tecaj":"1,0823"}]"#;
//! let rate = parse_rate(body).unwrap();
//! assert_eq!(rate.to_string(), "1.0823");
//! ```

mod fixed;
mod hnb;

pub use fixed::FixedRate;
pub use hnb::{AVERAGE_RATE_FIELD, DEFAULT_TIMEOUT, HNB_API_URL, HnbClient, parse_rate};
