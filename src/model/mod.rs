//! Typed records for every data shape the client can fetch, plus the
//! [`DataRequest`]/[`TickerData`] pair driving the aggregation engine.
//!
//! Wire structs follow the upstream camelCase naming; unknown fields are
//! discarded and optional fields tolerate absence.

mod analyst;
mod events;
mod filings;
mod fundamentals;
mod history;
mod news;
mod ownership;
mod profile;
mod quote;
mod request;
mod ticker_data;
mod transcripts;
mod valuation;

pub use analyst::{AnalystEstimate, AnalystGrade, PriceTarget, PriceTargetSummary};
pub use events::{DividendRecord, EarningsEvent, StockSplit};
pub use filings::SecFiling;
pub use fundamentals::{
    BalanceSheet, CashFlowStatement, FinancialRatios, FinancialScores, IncomeStatement, KeyMetrics,
};
pub use history::HistoricalPrice;
pub use news::NewsArticle;
pub use ownership::{InsiderTrade, InstitutionalHolder};
pub use profile::{CompanyProfile, Executive};
pub use quote::{AftermarketQuote, Quote};
pub use request::{DataRequest, DataRequestBuilder, PeriodType};
pub use ticker_data::TickerData;
pub use transcripts::EarningsTranscript;
pub use valuation::{DcfValuation, EnterpriseValue};
