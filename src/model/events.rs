use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical dividend payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendRecord {
    /// Stock ticker symbol.
    pub symbol: Option<String>,
    /// Ex-dividend date.
    pub date: NaiveDate,
    /// Label (e.g. "February 09, 24").
    pub label: Option<String>,
    /// Split-adjusted dividend amount.
    pub adj_dividend: Option<f64>,
    /// Declared dividend amount.
    pub dividend: Option<f64>,
    pub record_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub declaration_date: Option<NaiveDate>,
}

/// One historical stock split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSplit {
    /// Stock ticker symbol.
    pub symbol: Option<String>,
    /// Split date.
    pub date: NaiveDate,
    pub label: Option<String>,
    /// Split numerator (a 4:1 split has numerator 4).
    pub numerator: Option<f64>,
    /// Split denominator.
    pub denominator: Option<f64>,
}

/// One earnings-calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsEvent {
    /// Stock ticker symbol.
    pub symbol: String,
    /// Earnings date.
    pub date: NaiveDate,
    /// Consensus EPS estimate.
    pub eps_estimated: Option<f64>,
    /// Reported EPS, once available.
    pub eps_actual: Option<f64>,
    /// Consensus revenue estimate.
    pub revenue_estimated: Option<f64>,
    /// Reported revenue, once available.
    pub revenue_actual: Option<f64>,
}
