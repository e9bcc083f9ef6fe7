//! Request specification for ticker data: which sections to fetch, and the
//! shared parameters that shape them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::FmpError;

/// Reporting period granularity for fundamentals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Quarterly periods.
    #[default]
    Quarter,
    /// Annual periods.
    Annual,
}

impl PeriodType {
    /// Value sent as the upstream `period` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quarter" => Ok(Self::Quarter),
            "annual" => Ok(Self::Annual),
            other => Err(FmpError::Validation(format!(
                "period type must be 'quarter' or 'annual', got '{other}'"
            ))),
        }
    }
}

/// What to fetch for a ticker. Built by [`DataRequestBuilder`], which
/// normalizes the symbol and enforces every numeric bound before any
/// dispatch happens.
///
/// All section flags default to off; callers opt in per section. The
/// `include_fundamentals` umbrella expands into the six fundamental sections
/// at dispatch time, idempotently with the individual flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct DataRequest {
    /// Normalized (trimmed, upper-cased) ticker symbol.
    pub symbol: String,

    pub include_quote: bool,
    pub include_aftermarket_quote: bool,
    pub include_profile: bool,
    pub include_executives: bool,
    pub include_dividends: bool,
    pub include_splits: bool,
    pub include_earnings_calendar: bool,
    /// Umbrella flag for all six fundamental sections.
    pub include_fundamentals: bool,
    pub include_income_statements: bool,
    pub include_balance_sheets: bool,
    pub include_cash_flows: bool,
    pub include_key_metrics: bool,
    pub include_ratios: bool,
    pub include_financial_scores: bool,
    pub include_dcf: bool,
    pub include_enterprise_values: bool,
    pub include_analyst_estimates: bool,
    /// Expands into price targets and the price-target summary.
    pub include_price_targets: bool,
    pub include_analyst_grades: bool,
    pub include_institutional_holders: bool,
    pub include_insider_trades: bool,
    pub include_historical_prices: bool,
    pub include_transcripts: bool,
    pub include_sec_filings: bool,
    pub include_news: bool,

    /// Periods to fetch for period-scoped sections (1-20).
    pub periods: u32,
    /// Period granularity for period-scoped sections.
    pub period_type: PeriodType,
    /// Days of insider trades to fetch (1-365).
    pub insider_trades_days: u32,
    /// Days of historical prices to fetch (1-3650).
    pub historical_days: u32,
    /// Number of transcripts to fetch (1-20).
    pub transcript_count: u32,
    /// Filing form types to fetch (e.g. `10-K`); `None` means all types.
    pub sec_filing_types: Option<Vec<String>>,
    /// Number of filings to fetch (1-50).
    pub sec_filing_count: u32,
    /// Number of news articles to fetch (1-100).
    pub news_count: u32,
}

impl DataRequest {
    /// Start building a request for `symbol`.
    pub fn builder(symbol: impl Into<String>) -> DataRequestBuilder {
        DataRequestBuilder::new(symbol)
    }

    /// Re-check every invariant the builder enforced. The aggregation engine
    /// calls this defensively before dispatch, since the fields are public.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Validation`] naming the first violated bound.
    pub fn validate(&self) -> Result<(), FmpError> {
        if self.symbol.trim().is_empty() {
            return Err(FmpError::Validation("symbol must not be empty".into()));
        }
        check_bound("periods", self.periods, 1, 20)?;
        check_bound("insider_trades_days", self.insider_trades_days, 1, 365)?;
        check_bound("historical_days", self.historical_days, 1, 3650)?;
        check_bound("transcript_count", self.transcript_count, 1, 20)?;
        check_bound("sec_filing_count", self.sec_filing_count, 1, 50)?;
        check_bound("news_count", self.news_count, 1, 100)?;
        Ok(())
    }
}

fn check_bound(name: &str, value: u32, min: u32, max: u32) -> Result<(), FmpError> {
    if value < min || value > max {
        return Err(FmpError::Validation(format!(
            "{name} must be in [{min}, {max}], got {value}"
        )));
    }
    Ok(())
}

/// Builder for [`DataRequest`].
pub struct DataRequestBuilder {
    request: DataRequest,
}

macro_rules! flag_setters {
    ($($(#[$doc:meta])* $method:ident => $field:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub const fn $method(mut self, include: bool) -> Self {
                self.request.$field = include;
                self
            }
        )+
    };
}

impl DataRequestBuilder {
    fn new(symbol: impl Into<String>) -> Self {
        Self {
            request: DataRequest {
                symbol: symbol.into(),
                include_quote: false,
                include_aftermarket_quote: false,
                include_profile: false,
                include_executives: false,
                include_dividends: false,
                include_splits: false,
                include_earnings_calendar: false,
                include_fundamentals: false,
                include_income_statements: false,
                include_balance_sheets: false,
                include_cash_flows: false,
                include_key_metrics: false,
                include_ratios: false,
                include_financial_scores: false,
                include_dcf: false,
                include_enterprise_values: false,
                include_analyst_estimates: false,
                include_price_targets: false,
                include_analyst_grades: false,
                include_institutional_holders: false,
                include_insider_trades: false,
                include_historical_prices: false,
                include_transcripts: false,
                include_sec_filings: false,
                include_news: false,
                periods: 4,
                period_type: PeriodType::Quarter,
                insider_trades_days: 90,
                historical_days: 90,
                transcript_count: 4,
                sec_filing_types: None,
                sec_filing_count: 5,
                news_count: 10,
            },
        }
    }

    flag_setters! {
        /// Include the real-time quote.
        quote => include_quote,
        /// Include the after-hours quote.
        aftermarket_quote => include_aftermarket_quote,
        /// Include the company profile.
        profile => include_profile,
        /// Include executive officers.
        executives => include_executives,
        /// Include dividend history.
        dividends => include_dividends,
        /// Include stock split history.
        splits => include_splits,
        /// Include the earnings calendar.
        earnings_calendar => include_earnings_calendar,
        /// Umbrella: include all six fundamental sections.
        fundamentals => include_fundamentals,
        /// Include income statements.
        income_statements => include_income_statements,
        /// Include balance sheets.
        balance_sheets => include_balance_sheets,
        /// Include cash-flow statements.
        cash_flows => include_cash_flows,
        /// Include key financial metrics.
        key_metrics => include_key_metrics,
        /// Include financial ratios.
        ratios => include_ratios,
        /// Include financial scores (Piotroski, Altman Z).
        financial_scores => include_financial_scores,
        /// Include the DCF valuation.
        dcf => include_dcf,
        /// Include enterprise-value history.
        enterprise_values => include_enterprise_values,
        /// Include analyst estimates.
        analyst_estimates => include_analyst_estimates,
        /// Include price targets and the price-target summary.
        price_targets => include_price_targets,
        /// Include analyst upgrades/downgrades.
        analyst_grades => include_analyst_grades,
        /// Include institutional ownership.
        institutional_holders => include_institutional_holders,
        /// Include insider trading activity.
        insider_trades => include_insider_trades,
        /// Include historical end-of-day prices.
        historical_prices => include_historical_prices,
        /// Include earnings-call transcripts.
        transcripts => include_transcripts,
        /// Include SEC filings.
        sec_filings => include_sec_filings,
        /// Include recent news articles.
        news => include_news,
    }

    /// Periods to fetch for period-scoped sections (1-20).
    #[must_use]
    pub const fn periods(mut self, periods: u32) -> Self {
        self.request.periods = periods;
        self
    }

    /// Period granularity for period-scoped sections.
    #[must_use]
    pub const fn period_type(mut self, period_type: PeriodType) -> Self {
        self.request.period_type = period_type;
        self
    }

    /// Days of insider trades to fetch (1-365).
    #[must_use]
    pub const fn insider_trades_days(mut self, days: u32) -> Self {
        self.request.insider_trades_days = days;
        self
    }

    /// Days of historical prices to fetch (1-3650).
    #[must_use]
    pub const fn historical_days(mut self, days: u32) -> Self {
        self.request.historical_days = days;
        self
    }

    /// Number of transcripts to fetch (1-20).
    #[must_use]
    pub const fn transcript_count(mut self, count: u32) -> Self {
        self.request.transcript_count = count;
        self
    }

    /// Filing form types to fetch; normalized to uppercase.
    #[must_use]
    pub fn sec_filing_types(mut self, types: Vec<String>) -> Self {
        self.request.sec_filing_types = Some(types);
        self
    }

    /// Number of filings to fetch (1-50).
    #[must_use]
    pub const fn sec_filing_count(mut self, count: u32) -> Self {
        self.request.sec_filing_count = count;
        self
    }

    /// Number of news articles to fetch (1-100).
    #[must_use]
    pub const fn news_count(mut self, count: u32) -> Self {
        self.request.news_count = count;
        self
    }

    /// Enable the quote, profile, and every fundamental, analyst, ownership,
    /// valuation, event, and price-history section in one call.
    #[must_use]
    pub const fn full_analysis(self) -> Self {
        self.quote(true)
            .profile(true)
            .executives(true)
            .fundamentals(true)
            .analyst_estimates(true)
            .price_targets(true)
            .analyst_grades(true)
            .institutional_holders(true)
            .insider_trades(true)
            .historical_prices(true)
            .dcf(true)
            .enterprise_values(true)
            .dividends(true)
            .splits(true)
            .earnings_calendar(true)
    }

    /// Normalize and validate, producing the request.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Validation`] for an empty symbol or any numeric
    /// bound violation.
    pub fn build(mut self) -> Result<DataRequest, FmpError> {
        self.request.symbol = self.request.symbol.trim().to_uppercase();
        if let Some(types) = &mut self.request.sec_filing_types {
            for t in types.iter_mut() {
                *t = t.trim().to_uppercase();
            }
        }
        self.request.validate()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_normalized() {
        let req = DataRequest::builder("  aapl ").quote(true).build().unwrap();
        assert_eq!(req.symbol, "AAPL");
    }

    #[test]
    fn empty_symbol_is_rejected() {
        let err = DataRequest::builder("   ").build().unwrap_err();
        assert!(matches!(err, FmpError::Validation(_)));
    }

    #[test]
    fn out_of_range_bounds_are_rejected() {
        assert!(DataRequest::builder("AAPL").periods(0).build().is_err());
        assert!(DataRequest::builder("AAPL").periods(21).build().is_err());
        assert!(
            DataRequest::builder("AAPL")
                .historical_days(3651)
                .build()
                .is_err()
        );
        assert!(DataRequest::builder("AAPL").news_count(101).build().is_err());
        assert!(DataRequest::builder("AAPL").periods(20).build().is_ok());
    }

    #[test]
    fn filing_types_are_uppercased() {
        let req = DataRequest::builder("AAPL")
            .sec_filings(true)
            .sec_filing_types(vec!["10-k".into(), " 8-K ".into()])
            .build()
            .unwrap();
        assert_eq!(
            req.sec_filing_types.as_deref(),
            Some(&["10-K".to_string(), "8-K".to_string()][..])
        );
    }

    #[test]
    fn period_type_parses() {
        assert_eq!("Quarter".parse::<PeriodType>().unwrap(), PeriodType::Quarter);
        assert_eq!("annual".parse::<PeriodType>().unwrap(), PeriodType::Annual);
        assert!("monthly".parse::<PeriodType>().is_err());
    }
}
