use thiserror::Error;

use crate::core::tier::Tier;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FmpError {
    /// A transport-level failure (connection, TLS, timeout). Retried up to the
    /// configured attempt budget before it surfaces.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller's subscription tier is insufficient for the endpoint.
    /// Structural rejection; never retried.
    #[error("endpoint {endpoint} requires the {required} tier (current tier: {current})")]
    TierDenied {
        /// Stable name of the rejected endpoint.
        endpoint: &'static str,
        /// Minimum tier the endpoint requires.
        required: Tier,
        /// The tier the client was built with.
        current: Tier,
    },

    /// The upstream API rejected the call with HTTP 429.
    #[error("rate limited by upstream (HTTP 429); reduce request frequency")]
    RateLimited,

    /// A non-2xx status, or a 200 whose body carries the vendor error marker.
    #[error("API error {status}: {message}")]
    Api {
        /// The HTTP status code (the original status for embedded errors).
        status: u16,
        /// The response body or embedded error message.
        message: String,
    },

    /// A malformed request rejected before any dispatch.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The payload was syntactically valid JSON but did not decode into the
    /// expected record shape.
    #[error("unexpected data shape: {0}")]
    Data(String),
}
