//! In-memory reference cache backend.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::cache::policy::policy_for;
use crate::cache::{BoxFuture, TickerCache};
use crate::core::error::FmpError;

#[derive(Debug)]
struct CacheEntry {
    payload: Value,
    /// `None` means the entry never expires (permanent policy).
    expires_at: Option<Instant>,
}

/// A process-local [`TickerCache`] honoring the per-data-type TTL table.
///
/// Useful as a default backend and as a fake in tests; durable backends live
/// behind the same trait.
#[derive(Debug, Default)]
pub struct MemoryCache {
    map: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(symbol: &str, data_type: &str, period_key: Option<&str>) -> String {
        format!("{symbol}|{data_type}|{}", period_key.unwrap_or(""))
    }
}

impl TickerCache for MemoryCache {
    fn get<'a>(
        &'a self,
        symbol: &'a str,
        data_type: &'a str,
        period_key: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<Value>, FmpError>> {
        Box::pin(async move {
            let key = Self::key(symbol, data_type, period_key);
            let guard = self.map.read().await;
            if let Some(entry) = guard.get(&key)
                && entry.expires_at.is_none_or(|at| Instant::now() <= at)
            {
                return Ok(Some(entry.payload.clone()));
            }
            Ok(None)
        })
    }

    fn set<'a>(
        &'a self,
        symbol: &'a str,
        data_type: &'a str,
        payload: Value,
        period_key: Option<&'a str>,
    ) -> BoxFuture<'a, Result<(), FmpError>> {
        Box::pin(async move {
            let policy = policy_for(data_type);
            if !policy.should_cache() {
                return Ok(());
            }
            let entry = CacheEntry {
                payload,
                expires_at: policy.ttl().map(|ttl| Instant::now() + ttl),
            };
            let key = Self::key(symbol, data_type, period_key);
            self.map.write().await.insert(key, entry);
            Ok(())
        })
    }

    fn clear<'a>(&'a self, symbol: Option<&'a str>) -> BoxFuture<'a, Result<(), FmpError>> {
        Box::pin(async move {
            let mut guard = self.map.write().await;
            match symbol {
                Some(sym) => {
                    let prefix = format!("{sym}|");
                    guard.retain(|key, _| !key.starts_with(&prefix));
                }
                None => guard.clear(),
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn round_trip_and_clear() {
        let cache = MemoryCache::new();
        cache
            .set("AAPL", "profile", json!({"symbol": "AAPL"}), None)
            .await
            .unwrap();
        cache
            .set("MSFT", "profile", json!({"symbol": "MSFT"}), None)
            .await
            .unwrap();

        assert!(cache.get("AAPL", "profile", None).await.unwrap().is_some());

        cache.clear(Some("AAPL")).await.unwrap();
        assert!(cache.get("AAPL", "profile", None).await.unwrap().is_none());
        assert!(cache.get("MSFT", "profile", None).await.unwrap().is_some());

        cache.clear(None).await.unwrap();
        assert!(cache.get("MSFT", "profile", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn period_keys_are_distinct() {
        let cache = MemoryCache::new();
        cache
            .set("AAPL", "income_statements", json!([1]), Some("quarter_4"))
            .await
            .unwrap();

        assert!(
            cache
                .get("AAPL", "income_statements", Some("annual_10"))
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            cache
                .get("AAPL", "income_statements", Some("quarter_4"))
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn short_lived_entries_expire() {
        let cache = MemoryCache::new();
        cache
            .set("AAPL", "quote", json!({"price": 1.0}), None)
            .await
            .unwrap();

        tokio::time::advance(std::time::Duration::from_secs(14 * 60)).await;
        assert!(cache.get("AAPL", "quote", None).await.unwrap().is_some());

        tokio::time::advance(std::time::Duration::from_secs(2 * 60)).await;
        assert!(cache.get("AAPL", "quote", None).await.unwrap().is_none());
    }
}
