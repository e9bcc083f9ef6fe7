use std::time::Duration;

use tokio::time::Instant;

use fmp_client::RateLimiter;

#[tokio::test(start_paused = true)]
async fn full_bucket_admits_a_burst_without_waiting() {
    let limiter = RateLimiter::new(60);
    let start = Instant::now();
    for _ in 0..60 {
        limiter.acquire().await;
    }
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn empty_bucket_waits_for_one_refill_interval() {
    // 60 cpm refills one token per second.
    let limiter = RateLimiter::new(60);
    for _ in 0..60 {
        limiter.acquire().await;
    }

    let start = Instant::now();
    limiter.acquire().await;
    let waited = start.elapsed();
    assert!(
        waited >= Duration::from_millis(990) && waited <= Duration::from_millis(1100),
        "waited {waited:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn status_is_read_only() {
    let limiter = RateLimiter::new(120);
    limiter.acquire().await;

    let first = limiter.status();
    let second = limiter.status();
    assert_eq!(first.tokens_remaining, second.tokens_remaining);
    assert_eq!(first.calls_per_minute, 120);
    assert_eq!(first.max_tokens, 120.0);
    assert_eq!(first.refill_rate_per_second, 2.0);
}

#[tokio::test(start_paused = true)]
async fn refill_is_capped_at_capacity() {
    let limiter = RateLimiter::new(60);
    limiter.acquire().await;

    tokio::time::advance(Duration::from_secs(3600)).await;
    let status = limiter.status();
    assert_eq!(status.tokens_remaining, 60.0);
}

#[tokio::test(start_paused = true)]
async fn set_rate_resets_to_a_full_bucket_at_the_new_rate() {
    let limiter = RateLimiter::new(300);
    for _ in 0..300 {
        limiter.acquire().await;
    }
    assert!(limiter.status().tokens_remaining < 1.0);

    limiter.set_rate(500);
    let status = limiter.status();
    assert_eq!(status.calls_per_minute, 500);
    assert_eq!(status.tokens_remaining, 500.0);

    let start = Instant::now();
    limiter.acquire().await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}
