//! The raw fetch pipeline: tier gate, rate limiter, retried GET, and
//! response classification.

use serde_json::{Map, Value};
use url::Url;

use crate::core::client::FmpClient;
use crate::core::client::constants::ERROR_MESSAGE_FIELD;
use crate::core::endpoints::Endpoint;
use crate::core::error::FmpError;

impl FmpClient {
    /// Perform one logical upstream GET and return the parsed JSON body.
    ///
    /// The pipeline is: session open (idempotent) → tier gate → rate-limit
    /// token → URL build → GET with bounded retry on transport faults →
    /// response classification. A 429 maps to [`FmpError::RateLimited`],
    /// any other non-2xx (or a 200 carrying the vendor error field) to
    /// [`FmpError::Api`]. Empty arrays and objects are valid successes.
    ///
    /// # Errors
    ///
    /// [`FmpError::TierDenied`] and [`FmpError::Api`] surface immediately and
    /// are never retried internally. Transport faults are retried per the
    /// client's [`RetryConfig`](crate::RetryConfig); the last one propagates
    /// as [`FmpError::Http`] once the attempt budget is exhausted.
    pub async fn fetch(
        &self,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: &[(&str, String)],
    ) -> Result<Value, FmpError> {
        let http = self.ensure_session().await?;

        if !self.tier().can_access(endpoint) {
            return Err(FmpError::TierDenied {
                endpoint: endpoint.name(),
                required: endpoint.required_tier(),
                current: self.tier(),
            });
        }

        self.rate_limiter().acquire().await;

        let url = self.build_url(endpoint, path_params, query)?;
        let resp = self.send_with_retry(&http, &url).await?;

        let status = resp.status().as_u16();
        if status == 429 {
            return Err(FmpError::RateLimited);
        }
        let body = resp.text().await?;
        if status >= 400 {
            return Err(FmpError::Api {
                status,
                message: body,
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        if let Some(message) = value.get(ERROR_MESSAGE_FIELD).and_then(Value::as_str) {
            return Err(FmpError::Api {
                status,
                message: message.to_string(),
            });
        }
        Ok(value)
    }

    /// Fetch and coerce to an object: a bare array is wrapped under a
    /// synthetic `data` field.
    pub async fn fetch_object(
        &self,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: &[(&str, String)],
    ) -> Result<Map<String, Value>, FmpError> {
        match self.fetch(endpoint, path_params, query).await? {
            Value::Object(map) => Ok(map),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                Ok(map)
            }
        }
    }

    /// Fetch and coerce to a list: an object wrapping a list under `data` is
    /// unwrapped, a lone object is promoted to a one-element list, anything
    /// else yields an empty list.
    pub async fn fetch_list(
        &self,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: &[(&str, String)],
    ) -> Result<Vec<Value>, FmpError> {
        match self.fetch(endpoint, path_params, query).await? {
            Value::Array(items) => Ok(items),
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.remove("data") {
                    return Ok(items);
                }
                Ok(vec![Value::Object(map)])
            }
            _ => Ok(vec![]),
        }
    }

    fn build_url(
        &self,
        endpoint: Endpoint,
        path_params: &[(&str, &str)],
        query: &[(&str, String)],
    ) -> Result<Url, FmpError> {
        let path = endpoint.resolve_path(path_params);
        if path.contains('{') {
            return Err(FmpError::Validation(format!(
                "unresolved placeholder in endpoint path '{path}'"
            )));
        }
        let mut url = self.base_url().join(&path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("apikey", self.api_key());
        }
        Ok(url)
    }

    async fn send_with_retry(
        &self,
        http: &reqwest::Client,
        url: &Url,
    ) -> Result<reqwest::Response, FmpError> {
        let retry = self.retry();
        let max_attempts = if retry.enabled {
            retry.max_retries.saturating_add(1)
        } else {
            1
        };

        let mut attempt: u32 = 1;
        loop {
            let outcome = http.get(url.clone()).send().await;
            match outcome {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < max_attempts && retry.retry_on_status.contains(&status) {
                        tracing::debug!(attempt, status, "retryable status, backing off");
                    } else {
                        return Ok(resp);
                    }
                }
                Err(err) => {
                    let transient = (retry.retry_on_timeout && err.is_timeout())
                        || (retry.retry_on_connect && err.is_connect());
                    if !transient || attempt >= max_attempts {
                        return Err(err.into());
                    }
                    tracing::debug!(attempt, error = %err, "transient transport fault, backing off");
                }
            }
            tokio::time::sleep(retry.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}
