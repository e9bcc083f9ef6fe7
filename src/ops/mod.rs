//! Specialized typed fetch operations, one per data shape.
//!
//! Each operation calls the raw fetch pipeline with its endpoint and
//! parameters, applies the object/list projection, and decodes every JSON
//! element into the shape's record. Empty upstream responses are valid "no
//! data" results; an element that fails to decode is a unit-level fault
//! ([`FmpError::Data`]), not a silent drop.

pub(crate) mod analyst;
pub(crate) mod events;
pub(crate) mod filings;
pub(crate) mod fundamentals;
pub(crate) mod news;
pub(crate) mod ownership;
pub(crate) mod prices;
pub(crate) mod profile;
pub(crate) mod quote;
pub(crate) mod transcripts;
pub(crate) mod valuation;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::FmpError;
use crate::model::PeriodType;

pub(crate) fn decode_rows<T: DeserializeOwned>(
    rows: Vec<Value>,
    what: &str,
) -> Result<Vec<T>, FmpError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| FmpError::Data(format!("{what}: {e}")))
        })
        .collect()
}

pub(crate) fn decode_first<T: DeserializeOwned>(
    rows: Vec<Value>,
    what: &str,
) -> Result<Option<T>, FmpError> {
    rows.into_iter()
        .next()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| FmpError::Data(format!("{what}: {e}")))
        })
        .transpose()
}

pub(crate) fn symbol_query(symbol: &str) -> Vec<(&'static str, String)> {
    vec![("symbol", symbol.to_string())]
}

pub(crate) fn period_query(
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("symbol", symbol.to_string()),
        ("period", period_type.as_str().to_string()),
        ("limit", limit.to_string()),
    ]
}
