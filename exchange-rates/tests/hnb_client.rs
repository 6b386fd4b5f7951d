//! HnbClient tests against a local stub of the HNB endpoint.

use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use rust_decimal_macros::dec;

use exchange_rates::HnbClient;
use products_types::{ExchangeError, ExchangeRateProvider};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base: &str) -> HnbClient {
    HnbClient::new(format!("{}/tecajn-eur/v3", base), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_fetches_and_parses_rate() {
    let base = serve(Router::new().route(
        "/tecajn-eur/v3",
        get(|| async { r#"[{"valuta":"USD","srednji_tecaj":"1,0823"}]"# }),
    ))
    .await;

    let rate = client(&base).get_eur_to_usd_rate().await.unwrap();

    assert_eq!(rate.value(), dec!(1.0823));
}

#[tokio::test]
async fn test_empty_body_is_reported() {
    let base = serve(Router::new().route("/tecajn-eur/v3", get(|| async { "" }))).await;

    let result = client(&base).get_eur_to_usd_rate().await;

    assert_eq!(result, Err(ExchangeError::EmptyBody));
}

#[tokio::test]
async fn test_empty_array_is_reported() {
    let base = serve(Router::new().route("/tecajn-eur/v3", get(|| async { "[]" }))).await;

    let result = client(&base).get_eur_to_usd_rate().await;

    assert_eq!(result, Err(ExchangeError::NoData));
}

#[tokio::test]
async fn test_server_error_status_is_a_request_failure() {
    let base = serve(Router::new().route(
        "/tecajn-eur/v3",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    ))
    .await;

    let result = client(&base).get_eur_to_usd_rate().await;

    assert!(matches!(result, Err(ExchangeError::Request(_))));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let base = serve(Router::new().route(
        "/tecajn-eur/v3",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            r#"[{"srednji_tecaj":"1,0823"}]"#
        }),
    ))
    .await;

    let client =
        HnbClient::new(format!("{}/tecajn-eur/v3", base), Duration::from_millis(200)).unwrap();
    let result = client.get_eur_to_usd_rate().await;

    assert!(matches!(result, Err(ExchangeError::Request(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_a_request_failure() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(&format!("http://{}", addr))
        .get_eur_to_usd_rate()
        .await;

    assert!(matches!(result, Err(ExchangeError::Request(_))));
}
