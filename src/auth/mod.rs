//! Server-side API key registry with per-key fixed-window rate accounting.
//!
//! This is the admission-control counterpart to the client: services that
//! proxy upstream data check inbound keys against a repository before doing
//! any work. The repository is a trait so keys can live in any store; the
//! in-memory backend covers tests and single-process deployments.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use crate::cache::BoxFuture;
use crate::core::error::FmpError;
use crate::core::tier::Tier;

/// Accounting window for per-key rate limits.
const WINDOW: Duration = Duration::from_secs(60);

/// One registered API key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// The key itself.
    pub key: String,
    /// Human-readable owner label.
    pub owner: String,
    /// Tier the key is entitled to.
    pub tier: Tier,
    /// Calls allowed per minute; `None` means the tier's default.
    pub calls_per_minute: Option<u32>,
    /// Disabled keys are rejected without counting.
    pub enabled: bool,
    /// When the key was registered.
    pub created_at: DateTime<Utc>,
}

impl ApiKeyRecord {
    /// Effective per-minute budget for this key.
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.calls_per_minute
            .unwrap_or_else(|| self.tier.default_calls_per_minute())
    }
}

/// Outcome of admitting one call against a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDecision {
    /// Call admitted; `remaining` calls left in the current window.
    Allowed { remaining: u32 },
    /// No such key.
    Unknown,
    /// Key exists but is disabled.
    Disabled,
    /// Key exhausted its window budget.
    RateExceeded { limit: u32 },
}

/// Storage and admission control for API keys.
pub trait ApiKeyRepository: Send + Sync + std::fmt::Debug {
    /// Look up a key's record without counting a call.
    fn lookup<'a>(
        &'a self,
        key: &'a str,
    ) -> BoxFuture<'a, Result<Option<ApiKeyRecord>, FmpError>>;

    /// Admit one call: validate the key and count it against the current
    /// window in a single step.
    fn check_and_count<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<KeyDecision, FmpError>>;
}

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
struct KeyEntry {
    record: ApiKeyRecord,
    window: Window,
}

/// In-memory [`ApiKeyRepository`].
#[derive(Debug, Default)]
pub struct MemoryKeyRepository {
    keys: RwLock<HashMap<String, KeyEntry>>,
}

impl MemoryKeyRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a key. A replaced key starts a fresh window.
    pub async fn register(&self, record: ApiKeyRecord) {
        let entry = KeyEntry {
            window: Window {
                started: Instant::now(),
                count: 0,
            },
            record,
        };
        self.keys.write().await.insert(entry.record.key.clone(), entry);
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &str) -> bool {
        self.keys.write().await.remove(key).is_some()
    }
}

impl ApiKeyRepository for MemoryKeyRepository {
    fn lookup<'a>(
        &'a self,
        key: &'a str,
    ) -> BoxFuture<'a, Result<Option<ApiKeyRecord>, FmpError>> {
        Box::pin(async move {
            Ok(self.keys.read().await.get(key).map(|e| e.record.clone()))
        })
    }

    fn check_and_count<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<KeyDecision, FmpError>> {
        Box::pin(async move {
            let mut keys = self.keys.write().await;
            let Some(entry) = keys.get_mut(key) else {
                return Ok(KeyDecision::Unknown);
            };
            if !entry.record.enabled {
                return Ok(KeyDecision::Disabled);
            }

            let now = Instant::now();
            if now.duration_since(entry.window.started) >= WINDOW {
                entry.window = Window {
                    started: now,
                    count: 0,
                };
            }

            let limit = entry.record.effective_limit();
            if entry.window.count >= limit {
                return Ok(KeyDecision::RateExceeded { limit });
            }
            entry.window.count += 1;
            Ok(KeyDecision::Allowed {
                remaining: limit - entry.window.count,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, limit: u32, enabled: bool) -> ApiKeyRecord {
        ApiKeyRecord {
            key: key.to_string(),
            owner: "test".to_string(),
            tier: Tier::Starter,
            calls_per_minute: Some(limit),
            enabled,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn unknown_key_is_rejected() {
        let repo = MemoryKeyRepository::new();
        assert_eq!(
            repo.check_and_count("nope").await.unwrap(),
            KeyDecision::Unknown
        );
    }

    #[tokio::test]
    async fn disabled_key_is_rejected_without_counting() {
        let repo = MemoryKeyRepository::new();
        repo.register(record("k", 5, false)).await;
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Disabled
        );
    }

    #[tokio::test]
    async fn budget_counts_down_within_window() {
        let repo = MemoryKeyRepository::new();
        repo.register(record("k", 3, true)).await;
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Allowed { remaining: 2 }
        );
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Allowed { remaining: 1 }
        );
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Allowed { remaining: 0 }
        );
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::RateExceeded { limit: 3 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn window_resets_after_a_minute() {
        let repo = MemoryKeyRepository::new();
        repo.register(record("k", 1, true)).await;
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Allowed { remaining: 0 }
        );
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::RateExceeded { limit: 1 }
        );

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Allowed { remaining: 0 }
        );
    }

    #[tokio::test]
    async fn lookup_does_not_count() {
        let repo = MemoryKeyRepository::new();
        repo.register(record("k", 1, true)).await;
        assert!(repo.lookup("k").await.unwrap().is_some());
        assert_eq!(
            repo.check_and_count("k").await.unwrap(),
            KeyDecision::Allowed { remaining: 0 }
        );
    }

    #[tokio::test]
    async fn effective_limit_falls_back_to_tier_default() {
        let mut rec = record("k", 1, true);
        rec.calls_per_minute = None;
        assert_eq!(rec.effective_limit(), 300);
    }
}
