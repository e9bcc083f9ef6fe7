//! Concurrent assembly of the ticker aggregate.
//!
//! Every requested section runs as an independent unit of work: cache
//! lookup, network fetch, cache write-back. Units run concurrently and a
//! failed unit never fails its siblings; the aggregate simply leaves that
//! slot empty and the failure is reported alongside the data.

mod data;
mod section;

pub use section::{Section, requested_sections};

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::core::{FmpClient, FmpError};
use crate::model::{CompanyProfile, DataRequest, Quote, TickerData};
use data::SectionData;

/// Cache key suffix for period-scoped sections.
fn period_key(req: &DataRequest) -> String {
    format!("{}_{}", req.period_type, req.periods)
}

/// One section end to end: cache probe, fetch, write-back.
///
/// A cache backend fault on read is demoted to a miss; on write, to a no-op.
/// Both are logged and neither fails the unit.
async fn run_unit(
    client: &FmpClient,
    req: &DataRequest,
    section: Section,
) -> Result<(SectionData, bool), FmpError> {
    let data_type = section.data_type();
    let period = section.period_scoped().then(|| period_key(req));

    if let Some(cache) = client.cache() {
        match cache.get(&req.symbol, data_type, period.as_deref()).await {
            Ok(Some(payload)) => match SectionData::decode_cached(section, payload) {
                Ok(data) => {
                    debug!(symbol = %req.symbol, data_type, "cache hit");
                    return Ok((data, true));
                }
                Err(err) => {
                    warn!(symbol = %req.symbol, data_type, %err, "discarding undecodable cache entry");
                }
            },
            Ok(None) => {}
            Err(err) => {
                warn!(symbol = %req.symbol, data_type, %err, "cache read failed, treating as miss");
            }
        }
    }

    let data = SectionData::fetch(client, req, section).await?;

    // Only non-empty results are persisted; an empty "no data" response must
    // stay refetchable, not get pinned under a long or permanent TTL.
    if let Some(cache) = client.cache()
        && !data.is_empty()
    {
        match data.to_cache_payload() {
            Ok(payload) => {
                if let Err(err) = cache
                    .set(&req.symbol, data_type, payload, period.as_deref())
                    .await
                {
                    warn!(symbol = %req.symbol, data_type, %err, "cache write failed");
                }
            }
            Err(err) => {
                warn!(symbol = %req.symbol, data_type, %err, "section payload not serializable for cache");
            }
        }
    }

    Ok((data, false))
}

/// Dispatch every requested section concurrently and fold the results.
///
/// Returns the aggregate plus the per-section failures; the caller decides
/// whether a failure is tolerable.
async fn run(
    client: &FmpClient,
    req: &DataRequest,
) -> (TickerData, Vec<(Section, FmpError)>) {
    let sections: Vec<Section> = requested_sections(req).into_iter().collect();

    let units = sections
        .iter()
        .map(|&section| run_unit(client, req, section));
    let outcomes = join_all(units).await;

    let mut data = TickerData {
        symbol: req.symbol.clone(),
        ..TickerData::default()
    };
    let mut failures = Vec::new();

    for (section, outcome) in sections.into_iter().zip(outcomes) {
        match outcome {
            Ok((payload, from_cache)) => {
                data.cache_hit |= from_cache;
                payload.apply(&mut data);
            }
            Err(err) => failures.push((section, err)),
        }
    }

    data.fetched_at = Some(Utc::now());
    (data, failures)
}

impl FmpClient {
    /// Fetch every section the request asks for and assemble the aggregate.
    ///
    /// Sections are fetched concurrently; a section that fails is logged and
    /// its slot left empty, so a partial upstream outage degrades the result
    /// instead of failing it.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Validation`] if the request violates a bound.
    /// Per-section fetch failures do not surface here.
    pub async fn get_ticker_data(&self, req: &DataRequest) -> Result<TickerData, FmpError> {
        req.validate()?;
        let (data, failures) = run(self, req).await;
        for (section, err) in failures {
            warn!(
                symbol = %req.symbol,
                section = section.data_type(),
                %err,
                "section failed, leaving slot empty"
            );
        }
        Ok(data)
    }

    /// Fetch just the real-time quote for `symbol`.
    ///
    /// # Errors
    ///
    /// Unlike [`get_ticker_data`](Self::get_ticker_data), the single
    /// section's failure propagates.
    pub async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, FmpError> {
        let req = DataRequest::builder(symbol).quote(true).build()?;
        let (data, mut failures) = run(self, &req).await;
        match failures.pop() {
            Some((_, err)) => Err(err),
            None => Ok(data.quote),
        }
    }

    /// Fetch just the company profile for `symbol`.
    ///
    /// # Errors
    ///
    /// The single section's failure propagates.
    pub async fn get_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, FmpError> {
        let req = DataRequest::builder(symbol).profile(true).build()?;
        let (data, mut failures) = run(self, &req).await;
        match failures.pop() {
            Some((_, err)) => Err(err),
            None => Ok(data.profile),
        }
    }
}
