//! The cache collaborator interface and a reference in-memory backend.
//!
//! The aggregation engine treats the cache as a key/value async store keyed
//! by `(symbol, data_type, optional period key)`. Any backend fault on that
//! path is swallowed at the point of use: a read fault becomes a miss, a
//! write fault a no-op. Backends only need to implement [`TickerCache`].

mod memory;
mod policy;

pub use memory::MemoryCache;
pub use policy::{CachePolicy, policy_for};

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::core::error::FmpError;

/// Boxed future used by the dyn-compatible cache trait.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Async key/value store for fetched ticker payloads.
///
/// `period_key` distinguishes entries for the same `(symbol, data_type)` that
/// differ only in period parameters (e.g. `quarter_4` vs `annual_10`).
/// Values are immutable snapshots; concurrent writers racing on the same key
/// are tolerated, last write wins.
pub trait TickerCache: Send + Sync + std::fmt::Debug {
    /// Look up a cached payload.
    fn get<'a>(
        &'a self,
        symbol: &'a str,
        data_type: &'a str,
        period_key: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Option<Value>, FmpError>>;

    /// Store a payload under the data type's TTL policy.
    fn set<'a>(
        &'a self,
        symbol: &'a str,
        data_type: &'a str,
        payload: Value,
        period_key: Option<&'a str>,
    ) -> BoxFuture<'a, Result<(), FmpError>>;

    /// Drop entries for one symbol, or everything when `symbol` is `None`.
    fn clear<'a>(&'a self, symbol: Option<&'a str>) -> BoxFuture<'a, Result<(), FmpError>>;
}
