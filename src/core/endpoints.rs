//! The fixed catalog of upstream API operations.
//!
//! Each [`Endpoint`] carries its URL path template and minimum subscription
//! tier. Paths may contain `{name}` placeholders resolved by the fetch
//! pipeline from caller-supplied path parameters.

use crate::core::tier::Tier;

/// One upstream API operation (FMP "stable" surface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Endpoint {
    // Quote data
    Quote,
    AftermarketQuote,
    QuoteShort,

    // Company profile
    Profile,
    Executives,

    // Corporate events
    DividendsHistorical,
    StockSplitHistorical,
    EarningsCalendar,
    EarningsHistorical,

    // Fundamental statements
    IncomeStatement,
    BalanceSheet,
    CashFlow,

    // Financial metrics
    KeyMetrics,
    FinancialRatios,
    FinancialScores,

    // Valuation
    Dcf,
    HistoricalDcf,
    EnterpriseValue,

    // Analyst data
    AnalystEstimates,
    PriceTargetConsensus,
    PriceTargetSummary,
    AnalystGrades,
    AnalystGradesConsensus,

    // Ownership
    InstitutionalHolders,
    InsiderTrading,
    InsiderStatistics,

    // Historical prices
    HistoricalPrices,
    HistoricalChart,

    // Earnings transcripts
    EarningCallTranscript,
    LatestEarningCallTranscripts,

    // SEC filings
    SecFilings,
    SecFilingsFinancials,

    // News
    StockNews,
    StockNewsSentiment,

    // Market data
    MarketHours,
    ExchangeMarketHours,

    // Symbols and search
    SymbolSearch,
    SymbolList,
}

impl Endpoint {
    /// Every operation in the catalog.
    pub const ALL: [Self; 38] = [
        Self::Quote,
        Self::AftermarketQuote,
        Self::QuoteShort,
        Self::Profile,
        Self::Executives,
        Self::DividendsHistorical,
        Self::StockSplitHistorical,
        Self::EarningsCalendar,
        Self::EarningsHistorical,
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::KeyMetrics,
        Self::FinancialRatios,
        Self::FinancialScores,
        Self::Dcf,
        Self::HistoricalDcf,
        Self::EnterpriseValue,
        Self::AnalystEstimates,
        Self::PriceTargetConsensus,
        Self::PriceTargetSummary,
        Self::AnalystGrades,
        Self::AnalystGradesConsensus,
        Self::InstitutionalHolders,
        Self::InsiderTrading,
        Self::InsiderStatistics,
        Self::HistoricalPrices,
        Self::HistoricalChart,
        Self::EarningCallTranscript,
        Self::LatestEarningCallTranscripts,
        Self::SecFilings,
        Self::SecFilingsFinancials,
        Self::StockNews,
        Self::StockNewsSentiment,
        Self::MarketHours,
        Self::ExchangeMarketHours,
        Self::SymbolSearch,
        Self::SymbolList,
    ];

    /// URL path template, relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Quote => "/stable/quote",
            Self::AftermarketQuote => "/stable/aftermarket-quote",
            Self::QuoteShort => "/stable/quote-short",
            Self::Profile => "/stable/profile",
            Self::Executives => "/stable/key-executives",
            Self::DividendsHistorical => "/stable/dividends",
            Self::StockSplitHistorical => "/stable/splits",
            Self::EarningsCalendar => "/stable/earnings-calendar",
            Self::EarningsHistorical => "/stable/earnings",
            Self::IncomeStatement => "/stable/income-statement",
            Self::BalanceSheet => "/stable/balance-sheet-statement",
            Self::CashFlow => "/stable/cash-flow-statement",
            Self::KeyMetrics => "/stable/key-metrics",
            Self::FinancialRatios => "/stable/ratios",
            Self::FinancialScores => "/stable/financial-scores",
            Self::Dcf => "/stable/discounted-cash-flow",
            Self::HistoricalDcf => "/stable/levered-discounted-cash-flow",
            Self::EnterpriseValue => "/stable/enterprise-values",
            Self::AnalystEstimates => "/stable/analyst-estimates",
            Self::PriceTargetConsensus => "/stable/price-target-consensus",
            Self::PriceTargetSummary => "/stable/price-target-summary",
            Self::AnalystGrades => "/stable/grades",
            Self::AnalystGradesConsensus => "/stable/grades-consensus",
            Self::InstitutionalHolders => {
                "/stable/institutional-ownership/symbol-positions-summary"
            }
            Self::InsiderTrading => "/stable/insider-trading/search",
            Self::InsiderStatistics => "/stable/insider-trading/statistics",
            Self::HistoricalPrices => "/stable/historical-price-eod/full",
            Self::HistoricalChart => "/stable/historical-chart/{timeframe}",
            Self::EarningCallTranscript => "/stable/earning-call-transcript",
            Self::LatestEarningCallTranscripts => "/stable/earning-call-transcript-latest",
            Self::SecFilings => "/stable/sec-filings-search/symbol",
            Self::SecFilingsFinancials => "/stable/sec-filings-financials",
            Self::StockNews => "/stable/news/stock-latest",
            Self::StockNewsSentiment => "/stable/news/stock",
            Self::MarketHours => "/stable/all-exchange-market-hours",
            Self::ExchangeMarketHours => "/stable/exchange-market-hours",
            Self::SymbolSearch => "/stable/search-symbol",
            Self::SymbolList => "/stable/stock-list",
        }
    }

    /// Stable identifier used in diagnostics and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::AftermarketQuote => "aftermarket_quote",
            Self::QuoteShort => "quote_short",
            Self::Profile => "profile",
            Self::Executives => "executives",
            Self::DividendsHistorical => "dividends_historical",
            Self::StockSplitHistorical => "stock_split_historical",
            Self::EarningsCalendar => "earnings_calendar",
            Self::EarningsHistorical => "earnings_historical",
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
            Self::KeyMetrics => "key_metrics",
            Self::FinancialRatios => "financial_ratios",
            Self::FinancialScores => "financial_scores",
            Self::Dcf => "dcf",
            Self::HistoricalDcf => "historical_dcf",
            Self::EnterpriseValue => "enterprise_value",
            Self::AnalystEstimates => "analyst_estimates",
            Self::PriceTargetConsensus => "price_target_consensus",
            Self::PriceTargetSummary => "price_target_summary",
            Self::AnalystGrades => "analyst_grades",
            Self::AnalystGradesConsensus => "analyst_grades_consensus",
            Self::InstitutionalHolders => "institutional_holders",
            Self::InsiderTrading => "insider_trading",
            Self::InsiderStatistics => "insider_statistics",
            Self::HistoricalPrices => "historical_prices",
            Self::HistoricalChart => "historical_chart",
            Self::EarningCallTranscript => "earning_call_transcript",
            Self::LatestEarningCallTranscripts => "latest_earning_call_transcripts",
            Self::SecFilings => "sec_filings",
            Self::SecFilingsFinancials => "sec_filings_financials",
            Self::StockNews => "stock_news",
            Self::StockNewsSentiment => "stock_news_sentiment",
            Self::MarketHours => "market_hours",
            Self::ExchangeMarketHours => "exchange_market_hours",
            Self::SymbolSearch => "symbol_search",
            Self::SymbolList => "symbol_list",
        }
    }

    /// Minimum subscription tier required. Operations outside the table
    /// default to [`Tier::Starter`].
    #[must_use]
    pub const fn required_tier(self) -> Tier {
        match self {
            Self::Quote
            | Self::Profile
            | Self::HistoricalPrices
            | Self::IncomeStatement
            | Self::BalanceSheet
            | Self::CashFlow
            | Self::SymbolSearch
            | Self::SymbolList
            | Self::StockNews
            | Self::Dcf
            | Self::KeyMetrics
            | Self::FinancialRatios
            | Self::MarketHours
            | Self::ExchangeMarketHours => Tier::Starter,

            Self::AftermarketQuote
            | Self::Executives
            | Self::DividendsHistorical
            | Self::StockSplitHistorical
            | Self::EarningsCalendar
            | Self::EarningsHistorical
            | Self::EnterpriseValue
            | Self::AnalystEstimates
            | Self::InstitutionalHolders
            | Self::InsiderTrading
            | Self::SecFilings
            | Self::EarningCallTranscript
            | Self::HistoricalChart => Tier::Premium,

            Self::PriceTargetConsensus
            | Self::PriceTargetSummary
            | Self::AnalystGrades
            | Self::AnalystGradesConsensus
            | Self::InsiderStatistics
            | Self::LatestEarningCallTranscripts
            | Self::StockNewsSentiment
            | Self::SecFilingsFinancials
            | Self::FinancialScores
            | Self::HistoricalDcf
            | Self::QuoteShort => Tier::Ultimate,
        }
    }

    /// Resolve the path template against the given path parameters.
    ///
    /// Unused parameters are ignored; an unresolved `{placeholder}` is a bug
    /// in the calling operation and is surfaced as [`FmpError::Validation`]
    /// by the fetch pipeline.
    #[must_use]
    pub(crate) fn resolve_path(self, path_params: &[(&str, &str)]) -> String {
        let mut path = self.path().to_string();
        for (key, value) in path_params {
            path = path.replace(&format!("{{{key}}}"), value);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_paths_are_unique() {
        let mut paths: Vec<&str> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn plain_path_is_untouched() {
        assert_eq!(Endpoint::Quote.resolve_path(&[]), "/stable/quote");
    }

    #[test]
    fn templated_path_substitutes_params() {
        assert_eq!(
            Endpoint::HistoricalChart.resolve_path(&[("timeframe", "1min")]),
            "/stable/historical-chart/1min"
        );
    }
}
