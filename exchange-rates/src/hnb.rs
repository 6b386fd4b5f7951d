//! HNB (Croatian National Bank) exchange-rate client.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;

use products_types::{ExchangeError, ExchangeRate, ExchangeRateProvider};

/// EUR exchange-rate list filtered to USD.
pub const HNB_API_URL: &str = "https://api.hnb.hr/tecajn-eur/v3?valuta=USD";

/// Field holding the middle (average) rate, formatted with a decimal comma.
pub const AVERAGE_RATE_FIELD: &str = "srednji_tecaj";

/// Upper bound for a single rate request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the HNB exchange-rate API.
///
/// Every call performs a fresh request; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct HnbClient {
    url: String,
    http: Client,
}

impl HnbClient {
    /// Creates a client for the given endpoint with a request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ExchangeError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExchangeError::Request(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// Creates a client for the public HNB endpoint.
    pub fn hnb() -> Result<Self, ExchangeError> {
        Self::new(HNB_API_URL, DEFAULT_TIMEOUT)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ExchangeRateProvider for HnbClient {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn get_eur_to_usd_rate(&self) -> Result<ExchangeRate, ExchangeError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::warn!("Exchange rate request failed: {}", e);
                ExchangeError::Request(e.to_string())
            })?;

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Request(e.to_string()))?;

        let rate = parse_rate(&body)?;
        tracing::debug!(%rate, "Fetched EUR→USD rate");
        Ok(rate)
    }
}

/// Extracts the EUR→USD rate from an HNB response body.
///
/// Takes the first record's [`AVERAGE_RATE_FIELD`], replaces the decimal
/// comma with a period and parses it as a decimal.
pub fn parse_rate(body: &str) -> Result<ExchangeRate, ExchangeError> {
    if body.trim().is_empty() {
        return Err(ExchangeError::EmptyBody);
    }

    let root: Value =
        serde_json::from_str(body).map_err(|e| ExchangeError::InvalidJson(e.to_string()))?;

    let first = root
        .as_array()
        .and_then(|records| records.first())
        .ok_or(ExchangeError::NoData)?;

    let raw = match first.get(AVERAGE_RATE_FIELD) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => return Err(ExchangeError::MissingField(AVERAGE_RATE_FIELD)),
    };

    let normalized = raw.trim().replace(',', ".");
    let value = Decimal::from_str(&normalized).map_err(|_| ExchangeError::InvalidRate(raw))?;

    Ok(ExchangeRate::new(value))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "broj_tecajnice": "62",
            "datum_primjene": "2024-03-29",
            "drzava": "SAD",
            "drzava_iso": "USA",
            "kupovni_tecaj": "1,0839",
            "prodajni_tecaj": "1,0807",
            "sifra_valute": "840",
            "srednji_tecaj": "1,0823",
            "valuta": "USD"
        }
    ]"#;

    #[test]
    fn test_parse_normalizes_decimal_comma() {
        let rate = parse_rate(SAMPLE).unwrap();
        assert_eq!(rate.value(), dec!(1.0823));
    }

    #[test]
    fn test_parse_takes_first_record() {
        let body = r#"[{"srednji_tecaj":"1,5"},{"srednji_tecaj":"9,9"}]"#;
        assert_eq!(parse_rate(body).unwrap().value(), dec!(1.5));
    }

    #[test]
    fn test_parse_accepts_numeric_field() {
        let body = r#"[{"srednji_tecaj":1.25}]"#;
        assert_eq!(parse_rate(body).unwrap().value(), dec!(1.25));
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_rate(""), Err(ExchangeError::EmptyBody));
        assert_eq!(parse_rate("  \n"), Err(ExchangeError::EmptyBody));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_rate("<html>Service Unavailable</html>"),
            Err(ExchangeError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_rate("[]"), Err(ExchangeError::NoData));
    }

    #[test]
    fn test_parse_not_an_array() {
        assert_eq!(
            parse_rate(r#"{"srednji_tecaj":"1,0823"}"#),
            Err(ExchangeError::NoData)
        );
    }

    #[test]
    fn test_parse_missing_field() {
        assert_eq!(
            parse_rate(r#"[{"kupovni_tecaj":"1,0839"}]"#),
            Err(ExchangeError::MissingField(AVERAGE_RATE_FIELD))
        );
    }

    #[test]
    fn test_parse_garbage_rate() {
        assert!(matches!(
            parse_rate(r#"[{"srednji_tecaj":"n/a"}]"#),
            Err(ExchangeError::InvalidRate(raw)) if raw == "n/a"
        ));
    }
}
