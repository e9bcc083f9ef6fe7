//! Token-bucket rate limiter shared by every call the client makes.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

#[derive(Debug)]
struct Bucket {
    calls_per_minute: u32,
    capacity: f64,
    tokens: f64,
    refill_per_sec: f64,
    last_refill: Instant,
}

impl Bucket {
    fn new(calls_per_minute: u32) -> Self {
        let capacity = f64::from(calls_per_minute);
        Self {
            calls_per_minute,
            capacity,
            tokens: capacity,
            refill_per_sec: capacity / 60.0,
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.refill_per_sec).min(self.capacity);
        self.last_refill = now;
    }

    fn virtual_tokens(&self, now: Instant) -> f64 {
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        (self.tokens + elapsed * self.refill_per_sec).min(self.capacity)
    }
}

/// A point-in-time, read-only view of the limiter.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RateLimitStatus {
    /// Tokens available right now, including uncommitted virtual refill.
    pub tokens_remaining: f64,
    /// Bucket capacity (equals the calls-per-minute budget).
    pub max_tokens: f64,
    /// The configured calls-per-minute budget.
    pub calls_per_minute: u32,
    /// Tokens added per second.
    pub refill_rate_per_second: f64,
}

/// Token-bucket limiter enforcing a calls-per-minute budget.
///
/// All token accounting happens under a single mutex; the lock is never held
/// across a sleep, so concurrent waiters, [`status`](Self::status), and
/// [`set_rate`](Self::set_rate) stay responsive while the bucket is empty.
#[derive(Debug)]
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
}

impl RateLimiter {
    /// Create a limiter with a full bucket of `calls_per_minute` tokens.
    #[must_use]
    pub fn new(calls_per_minute: u32) -> Self {
        Self {
            bucket: Mutex::new(Bucket::new(calls_per_minute)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Bucket> {
        self.bucket.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Suspend until a token is available, then deduct it.
    ///
    /// Never fails; it only ever delays. The wait is re-evaluated in a loop
    /// because scheduler jitter means the computed sleep does not necessarily
    /// line up with the refill that frees a token.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.lock();
                bucket.refill(Instant::now());
                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    return;
                }
                Duration::from_secs_f64((1.0 - bucket.tokens) / bucket.refill_per_sec)
            };
            tokio::time::sleep(wait).await;
        }
    }

    /// Non-mutating snapshot. The virtual refill is computed but not
    /// committed, so repeated status reads never perturb the bucket.
    #[must_use]
    pub fn status(&self) -> RateLimitStatus {
        let bucket = self.lock();
        RateLimitStatus {
            tokens_remaining: bucket.virtual_tokens(Instant::now()),
            max_tokens: bucket.capacity,
            calls_per_minute: bucket.calls_per_minute,
            refill_rate_per_second: bucket.refill_per_sec,
        }
    }

    /// Replace the limiter parameters wholesale: fresh capacity, a full
    /// bucket, and a new refill rate. Sleeping waiters re-evaluate against
    /// the new parameters on their next wake.
    pub fn set_rate(&self, calls_per_minute: u32) {
        *self.lock() = Bucket::new(calls_per_minute);
    }
}
