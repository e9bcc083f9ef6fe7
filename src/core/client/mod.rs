//! Public client surface + builder.
//! The raw fetch pipeline lives in `fetch`; retry policy types in `retry`.

mod constants;
mod fetch;
mod retry;

pub use retry::{Backoff, RetryConfig};

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::cache::TickerCache;
use crate::core::error::FmpError;
use crate::core::rate_limit::{RateLimitStatus, RateLimiter};
use crate::core::tier::Tier;
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};

struct Inner {
    /// Session slot: opened lazily on first use, dropped by `close()`.
    http: RwLock<Option<Client>>,
    base_url: Url,
    api_key: String,
    tier: Tier,
    rate_limiter: RateLimiter,
    retry: RetryConfig,
    timeout: Duration,
    user_agent: String,
    cache: Option<Arc<dyn TickerCache>>,
}

/// Asynchronous client for the Financial Modeling Prep API.
///
/// Cheap to clone; clones share the HTTP session, the rate limiter, and the
/// cache handle.
#[derive(Clone)]
pub struct FmpClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("tier", &self.inner.tier)
            .field("cache", &self.inner.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl FmpClient {
    /// Create a new builder.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.inner.api_key
    }

    pub(crate) fn retry(&self) -> &RetryConfig {
        &self.inner.retry
    }

    pub(crate) fn rate_limiter(&self) -> &RateLimiter {
        &self.inner.rate_limiter
    }

    /// The subscription tier this client was built with.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.inner.tier
    }

    /// The cache handle, if caching was enabled at build time.
    #[must_use]
    pub fn cache(&self) -> Option<&Arc<dyn TickerCache>> {
        self.inner.cache.as_ref()
    }

    /* -------- session lifecycle -------- */

    /// Open the HTTP session if it is not already open. Idempotent.
    pub(crate) async fn ensure_session(&self) -> Result<Client, FmpError> {
        if let Some(http) = self.inner.http.read().await.as_ref() {
            return Ok(http.clone());
        }
        let mut slot = self.inner.http.write().await;
        // Re-check: another task may have opened it between the two locks.
        if let Some(http) = slot.as_ref() {
            return Ok(http.clone());
        }
        let http = Client::builder()
            .user_agent(self.inner.user_agent.clone())
            .timeout(self.inner.timeout)
            .build()?;
        *slot = Some(http.clone());
        Ok(http)
    }

    /// Release the HTTP session. Calling `close` on an already-closed client
    /// is a no-op; a later call re-opens the session lazily.
    pub async fn close(&self) {
        self.inner.http.write().await.take();
    }

    /* -------- rate-limit administration -------- */

    /// Read-only snapshot of the rate limiter. Does not perturb the bucket.
    #[must_use]
    pub fn rate_limit_status(&self) -> RateLimitStatus {
        self.inner.rate_limiter.status()
    }

    /// Replace the calls-per-minute budget. Resets the bucket to full
    /// capacity under the new rate.
    pub fn set_rate_limit(&self, calls_per_minute: u32) {
        self.inner.rate_limiter.set_rate(calls_per_minute);
    }

    /* -------- cache administration -------- */

    /// Drop cached entries for one symbol, or everything when `symbol` is
    /// `None`. No-op when caching is disabled.
    ///
    /// # Errors
    ///
    /// Propagates the cache backend's failure; unlike the read/write path in
    /// the aggregation engine, an explicit administrative clear is not
    /// swallowed.
    pub async fn clear_cache(&self, symbol: Option<&str>) -> Result<(), FmpError> {
        match &self.inner.cache {
            Some(cache) => cache.clear(symbol).await,
            None => Ok(()),
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`FmpClient`].
#[derive(Default)]
pub struct FmpClientBuilder {
    api_key: Option<String>,
    tier: Option<Tier>,
    base_url: Option<Url>,
    calls_per_minute: Option<u32>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    retry: Option<RetryConfig>,
    cache: Option<Arc<dyn TickerCache>>,
}

impl FmpClientBuilder {
    /// Set the API key sent with every request. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the subscription tier. Default: [`Tier::Starter`].
    #[must_use]
    pub const fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Override the API base URL (tests point this at a mock server).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the calls-per-minute budget. Default: the tier's budget.
    #[must_use]
    pub const fn calls_per_minute(mut self, cpm: u32) -> Self {
        self.calls_per_minute = Some(cpm);
        self
    }

    /// Set the per-request timeout. Default: 30s.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the retry policy for transport faults.
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Attach a cache backend. If not set, every fetch goes to the network.
    #[must_use]
    pub fn cache(mut self, cache: Arc<dyn TickerCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Validation`] if the API key is missing or empty,
    /// or [`FmpError::Url`] if the default base URL constant fails to parse.
    pub fn build(self) -> Result<FmpClient, FmpError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| FmpError::Validation("an API key is required".into()))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let tier = self.tier.unwrap_or_default();
        let cpm = self
            .calls_per_minute
            .unwrap_or_else(|| tier.default_calls_per_minute());
        if cpm == 0 {
            return Err(FmpError::Validation(
                "calls_per_minute must be at least 1".into(),
            ));
        }

        Ok(FmpClient {
            inner: Arc::new(Inner {
                http: RwLock::new(None),
                base_url,
                api_key,
                tier,
                rate_limiter: RateLimiter::new(cpm),
                retry: self.retry.unwrap_or_default(),
                timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
                user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
                cache: self.cache,
            }),
        })
    }
}
