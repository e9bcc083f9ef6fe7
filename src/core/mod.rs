//! Core components of the `fmp-client` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FmpClient`] and its builder.
//! - The primary [`FmpError`] type.
//! - The token-bucket [`RateLimiter`] every call passes through.
//! - The [`Tier`] hierarchy and the [`Endpoint`] catalog it gates.

/// The main client (`FmpClient`), builder, retry policy, and fetch pipeline.
pub mod client;
/// The endpoint catalog and tier-requirement table.
pub mod endpoints;
/// The primary error type (`FmpError`) for the crate.
pub mod error;
/// The token-bucket rate limiter.
pub mod rate_limit;
/// Subscription tiers and access control.
pub mod tier;

// convenient re-exports so most code can just `use crate::core::FmpClient`
pub use client::{Backoff, FmpClient, FmpClientBuilder, RetryConfig};
pub use endpoints::Endpoint;
pub use error::FmpError;
pub use rate_limit::{RateLimitStatus, RateLimiter};
pub use tier::Tier;
