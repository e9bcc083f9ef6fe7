use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate position of one institutional holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalHolder {
    /// SEC CIK number.
    pub cik: Option<String>,
    /// Institution name.
    pub holder: String,
    /// Shares held.
    pub shares: Option<i64>,
    pub date_reported: Option<NaiveDate>,
    /// Share change since the prior report.
    pub change: Option<i64>,
    pub change_percent: Option<f64>,
    /// Position value in dollars.
    pub value: Option<f64>,
    /// Portfolio weight in percent.
    pub weight_percent: Option<f64>,
    /// Share of the company held, in percent.
    pub percent_held: Option<f64>,
}

/// One insider transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderTrade {
    pub symbol: String,
    pub filing_date: Option<NaiveDate>,
    pub transaction_date: Option<NaiveDate>,
    pub reporting_cik: Option<String>,
    /// Insider's name.
    pub reporting_name: Option<String>,
    /// Relationship to the company (officer, director, ...).
    pub type_of_owner: Option<String>,
    pub security_name: Option<String>,
    /// SEC transaction code (P-Purchase, S-Sale, ...).
    pub transaction_type: Option<String>,
    /// "A" for acquisition, "D" for disposition.
    pub acquisition_or_disposition: Option<String>,
    pub securities_transacted: Option<f64>,
    /// Transaction price per share.
    pub price: Option<f64>,
    /// Securities owned after the transaction.
    pub securities_owned: Option<f64>,
    /// SEC filing link.
    pub link: Option<String>,
}
