//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;
use rust_decimal::Decimal;

use exchange_rates::{DEFAULT_TIMEOUT, HNB_API_URL};

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Endpoint queried for the EUR→USD middle rate.
    pub exchange_rate_url: String,
    pub exchange_rate_timeout: Duration,
    /// When set, every operation uses this rate and HNB is never called.
    pub fixed_exchange_rate: Option<Decimal>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let exchange_rate_url =
            lookup("EXCHANGE_RATE_URL").unwrap_or_else(|| HNB_API_URL.to_string());

        let exchange_rate_timeout = match lookup("EXCHANGE_RATE_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .context("EXCHANGE_RATE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        let fixed_exchange_rate = lookup("FIXED_EXCHANGE_RATE")
            .map(|rate| {
                rate.trim()
                    .parse::<Decimal>()
                    .context("FIXED_EXCHANGE_RATE must be a decimal number")
            })
            .transpose()?;

        Ok(Self {
            port,
            database_url,
            exchange_rate_url,
            exchange_rate_timeout,
            fixed_exchange_rate,
        })
    }
}
