//! fmp-client: typed async client for the Financial Modeling Prep API.
//!
//! The entry point is [`FmpClient`], built via [`FmpClient::builder`]. The
//! client is cheap to clone and enforces the account's subscription tier and
//! calls-per-minute budget on every request. Individual data shapes are
//! fetched through [`FmpClient::get_ticker_data`], which expands a
//! [`DataRequest`] into concurrent per-section fetches and assembles a
//! [`TickerData`] aggregate, tolerating per-section failures.
//!
//! ```no_run
//! use fmp_client::{DataRequest, FmpClient, Tier};
//!
//! # async fn demo() -> Result<(), fmp_client::FmpError> {
//! let client = FmpClient::builder()
//!     .api_key("my-key")
//!     .tier(Tier::Premium)
//!     .build()?;
//!
//! let request = DataRequest::builder("AAPL")
//!     .quote(true)
//!     .fundamentals(true)
//!     .build()?;
//! let data = client.get_ticker_data(&request).await?;
//! println!("{}", data.summary());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod auth;
pub mod cache;
pub mod core;
pub mod model;
pub(crate) mod ops;

pub use crate::aggregate::{Section, requested_sections};
pub use crate::auth::{ApiKeyRecord, ApiKeyRepository, KeyDecision, MemoryKeyRepository};
pub use crate::cache::{CachePolicy, MemoryCache, TickerCache, policy_for};
pub use crate::core::{
    Backoff, Endpoint, FmpClient, FmpClientBuilder, FmpError, RateLimitStatus, RateLimiter,
    RetryConfig, Tier,
};
pub use crate::model::{DataRequest, DataRequestBuilder, PeriodType, TickerData};
