use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discounted-cash-flow valuation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfValuation {
    pub symbol: String,
    /// Valuation date.
    pub date: Option<NaiveDate>,
    /// DCF value per share.
    pub dcf: Option<f64>,
    /// Stock price at valuation time.
    #[serde(rename = "Stock Price", alias = "stockPrice")]
    pub stock_price: Option<f64>,
}

/// One enterprise-value period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseValue {
    pub symbol: String,
    pub date: NaiveDate,
    pub stock_price: Option<f64>,
    pub number_of_shares: Option<f64>,
    pub market_capitalization: Option<f64>,
    pub minus_cash_and_cash_equivalents: Option<f64>,
    pub add_total_debt: Option<f64>,
    pub enterprise_value: Option<f64>,
}
