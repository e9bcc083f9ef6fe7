use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One end-of-day price bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<i64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    /// Volume-weighted average price.
    pub vwap: Option<f64>,
}
