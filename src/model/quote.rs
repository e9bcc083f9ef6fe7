use serde::{Deserialize, Serialize};

/// Real-time stock quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Stock ticker symbol.
    pub symbol: String,
    /// Last traded price.
    pub price: Option<f64>,
    /// Trading volume.
    pub volume: Option<i64>,
    /// Price change in dollars.
    pub change: Option<f64>,
    /// Price change in percent.
    #[serde(rename = "changePercentage")]
    pub change_percent: Option<f64>,
    /// Day high price.
    pub day_high: Option<f64>,
    /// Day low price.
    pub day_low: Option<f64>,
    /// Previous closing price.
    pub previous_close: Option<f64>,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// 52-week high.
    pub year_high: Option<f64>,
    /// 52-week low.
    pub year_low: Option<f64>,
    /// Opening price.
    pub open: Option<f64>,
    /// Average daily volume.
    pub avg_volume: Option<i64>,
    /// Exchange short name.
    pub exchange: Option<String>,
    /// Quote timestamp (Unix seconds).
    pub timestamp: Option<i64>,
}

/// After-hours quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AftermarketQuote {
    /// Stock ticker symbol.
    pub symbol: String,
    /// Best bid price.
    pub bid_price: Option<f64>,
    /// Bid size.
    pub bid_size: Option<i64>,
    /// Best ask price.
    pub ask_price: Option<f64>,
    /// Ask size.
    pub ask_size: Option<i64>,
    /// After-hours volume.
    pub volume: Option<i64>,
    /// Quote timestamp (Unix milliseconds).
    pub timestamp: Option<i64>,
}
