#![allow(dead_code)]

use std::time::Duration;

use httpmock::MockServer;
use url::Url;

use fmp_client::{Backoff, FmpClient, FmpClientBuilder, RetryConfig, Tier};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Route client log output through the test harness; safe to call from
/// several tests, only the first wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fmp_client=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Builder pointed at the mock server with a tier and rate budget that never
/// get in the way, and a retry policy fast enough for tests.
pub fn builder_for(server: &MockServer) -> FmpClientBuilder {
    FmpClient::builder()
        .api_key("test-key")
        .tier(Tier::Ultimate)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .calls_per_minute(600_000)
        .timeout(Duration::from_millis(250))
        .retry_policy(fast_retry())
}

pub fn client_for(server: &MockServer) -> FmpClient {
    builder_for(server).build().unwrap()
}

pub fn fast_retry() -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries: 2,
        backoff: Backoff::Fixed(Duration::from_millis(10)),
        retry_on_status: vec![],
        retry_on_timeout: true,
        retry_on_connect: true,
    }
}

pub const QUOTE_BODY: &str = r#"[
  {
    "symbol": "AAPL",
    "price": 228.5,
    "volume": 44220000,
    "change": 1.25,
    "changePercentage": 0.55,
    "dayHigh": 229.9,
    "dayLow": 226.1,
    "previousClose": 227.25,
    "marketCap": 3456000000000.0,
    "exchange": "NASDAQ"
  }
]"#;

pub const PROFILE_BODY: &str = r#"[
  {
    "symbol": "AAPL",
    "companyName": "Apple Inc.",
    "currency": "USD",
    "exchange": "NASDAQ",
    "industry": "Consumer Electronics",
    "sector": "Technology",
    "country": "US",
    "marketCap": 3456000000000.0
  }
]"#;

pub const INCOME_BODY: &str = r#"[
  {
    "symbol": "AAPL",
    "date": "2025-06-28",
    "period": "Q3",
    "fiscalYear": "2025",
    "revenue": 94036000000.0,
    "grossProfit": 43879000000.0,
    "netIncome": 23434000000.0,
    "eps": 1.57
  },
  {
    "symbol": "AAPL",
    "date": "2025-03-29",
    "period": "Q2",
    "fiscalYear": "2025",
    "revenue": 95359000000.0,
    "grossProfit": 44867000000.0,
    "netIncome": 24780000000.0,
    "eps": 1.65
  }
]"#;
