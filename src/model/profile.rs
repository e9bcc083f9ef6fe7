use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Stock ticker symbol.
    pub symbol: String,
    /// Company name.
    pub company_name: Option<String>,
    /// Current stock price.
    pub price: Option<f64>,
    /// Business sector.
    pub sector: Option<String>,
    /// Industry.
    pub industry: Option<String>,
    /// Company description.
    pub description: Option<String>,
    /// CEO name.
    pub ceo: Option<String>,
    /// Full-time head count. Upstream serializes this as a string.
    pub full_time_employees: Option<String>,
    /// Company website.
    pub website: Option<String>,
    /// Country of incorporation.
    pub country: Option<String>,
    /// Exchange short name.
    pub exchange: Option<String>,
    /// Listing currency.
    pub currency: Option<String>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// IPO date.
    pub ipo_date: Option<NaiveDate>,
    /// Logo image URL.
    pub image: Option<String>,
}

/// Executive officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executive {
    /// Executive name.
    pub name: String,
    /// Job title.
    pub title: Option<String>,
    /// Total compensation.
    pub pay: Option<f64>,
    /// Currency of compensation.
    pub currency_pay: Option<String>,
    pub gender: Option<String>,
    /// Birth year.
    pub year_born: Option<i32>,
    /// Year started in current role.
    pub title_since: Option<i32>,
}
