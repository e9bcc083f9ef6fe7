use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Analyst EPS/revenue estimates for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystEstimate {
    pub symbol: String,
    /// Estimate date.
    pub date: NaiveDate,
    pub estimated_eps_avg: Option<f64>,
    pub estimated_eps_high: Option<f64>,
    pub estimated_eps_low: Option<f64>,
    pub number_analyst_estimated_eps: Option<i64>,
    pub estimated_revenue_avg: Option<f64>,
    pub estimated_revenue_high: Option<f64>,
    pub estimated_revenue_low: Option<f64>,
    pub number_analysts_estimated_revenue: Option<i64>,
}

/// One analyst price target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTarget {
    pub symbol: String,
    /// Publication timestamp, as reported upstream.
    pub published_date: Option<String>,
    pub price_target: Option<f64>,
    pub price_when_posted: Option<f64>,
    pub analyst_name: Option<String>,
    pub analyst_company: Option<String>,
    pub news_url: Option<String>,
    pub news_title: Option<String>,
    pub news_publisher: Option<String>,
}

/// Aggregated price-target consensus windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTargetSummary {
    pub symbol: String,
    /// Number of targets in the last month.
    pub last_month: Option<i64>,
    pub last_month_avg_price_target: Option<f64>,
    /// Number of targets in the last quarter.
    pub last_quarter: Option<i64>,
    pub last_quarter_avg_price_target: Option<f64>,
    /// Number of targets in the last year.
    pub last_year: Option<i64>,
    pub last_year_avg_price_target: Option<f64>,
}

/// One analyst upgrade/downgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystGrade {
    pub symbol: String,
    /// Grade date.
    pub date: Option<NaiveDate>,
    pub grading_company: Option<String>,
    pub previous_grade: Option<String>,
    pub new_grade: Option<String>,
    /// Action taken (upgrade, downgrade, hold, ...).
    pub action: Option<String>,
}
