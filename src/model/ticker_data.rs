//! The aggregate response record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::analyst::{AnalystEstimate, AnalystGrade, PriceTarget, PriceTargetSummary};
use crate::model::events::{DividendRecord, EarningsEvent, StockSplit};
use crate::model::filings::SecFiling;
use crate::model::fundamentals::{
    BalanceSheet, CashFlowStatement, FinancialRatios, FinancialScores, IncomeStatement, KeyMetrics,
};
use crate::model::history::HistoricalPrice;
use crate::model::news::NewsArticle;
use crate::model::ownership::{InsiderTrade, InstitutionalHolder};
use crate::model::profile::{CompanyProfile, Executive};
use crate::model::quote::{AftermarketQuote, Quote};
use crate::model::transcripts::EarningsTranscript;
use crate::model::valuation::{DcfValuation, EnterpriseValue};

/// Complete aggregated data for a ticker.
///
/// Every slot is populated only if its section was requested and obtained;
/// a failed section leaves its slot `None` (or empty, for the three
/// statement lists) rather than failing the whole call. Within a slot the
/// upstream's native ordering is preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerData {
    /// Normalized ticker symbol.
    pub symbol: String,

    pub quote: Option<Quote>,
    pub aftermarket_quote: Option<AftermarketQuote>,

    pub profile: Option<CompanyProfile>,
    pub executives: Option<Vec<Executive>>,

    pub dividends: Option<Vec<DividendRecord>>,
    pub splits: Option<Vec<StockSplit>>,
    pub earnings_calendar: Option<Vec<EarningsEvent>>,

    #[serde(default)]
    pub income_statements: Vec<IncomeStatement>,
    #[serde(default)]
    pub balance_sheets: Vec<BalanceSheet>,
    #[serde(default)]
    pub cash_flow_statements: Vec<CashFlowStatement>,

    pub key_metrics: Option<Vec<KeyMetrics>>,
    pub financial_ratios: Option<Vec<FinancialRatios>>,
    pub financial_scores: Option<Vec<FinancialScores>>,

    pub dcf_valuation: Option<DcfValuation>,
    pub enterprise_values: Option<Vec<EnterpriseValue>>,

    pub analyst_estimates: Option<Vec<AnalystEstimate>>,
    pub price_targets: Option<Vec<PriceTarget>>,
    pub price_target_summary: Option<PriceTargetSummary>,
    pub analyst_grades: Option<Vec<AnalystGrade>>,

    pub institutional_holders: Option<Vec<InstitutionalHolder>>,
    pub insider_trades: Option<Vec<InsiderTrade>>,

    pub historical_prices: Option<Vec<HistoricalPrice>>,

    pub transcripts: Option<Vec<EarningsTranscript>>,
    pub sec_filings: Option<Vec<SecFiling>>,

    pub news: Option<Vec<NewsArticle>>,

    /// When the aggregate was assembled.
    pub fetched_at: Option<DateTime<Utc>>,
    /// Whether any section was served from cache.
    #[serde(default)]
    pub cache_hit: bool,
}

impl TickerData {
    /// The most recent income statement, if any.
    #[must_use]
    pub fn latest_income_statement(&self) -> Option<&IncomeStatement> {
        self.income_statements.first()
    }

    /// The most recent balance sheet, if any.
    #[must_use]
    pub fn latest_balance_sheet(&self) -> Option<&BalanceSheet> {
        self.balance_sheets.first()
    }

    /// The most recent cash-flow statement, if any.
    #[must_use]
    pub fn latest_cash_flow(&self) -> Option<&CashFlowStatement> {
        self.cash_flow_statements.first()
    }

    /// The most recent key metrics, if any.
    #[must_use]
    pub fn latest_key_metrics(&self) -> Option<&KeyMetrics> {
        self.key_metrics.as_ref().and_then(|m| m.first())
    }

    /// The most recent financial ratios, if any.
    #[must_use]
    pub fn latest_ratios(&self) -> Option<&FinancialRatios> {
        self.financial_ratios.as_ref().and_then(|r| r.first())
    }

    /// Whether any fundamental data is present.
    #[must_use]
    pub fn has_fundamentals(&self) -> bool {
        !self.income_statements.is_empty()
            || !self.balance_sheets.is_empty()
            || !self.cash_flow_statements.is_empty()
            || self.key_metrics.as_ref().is_some_and(|m| !m.is_empty())
            || self
                .financial_ratios
                .as_ref()
                .is_some_and(|r| !r.is_empty())
    }

    /// Whether any analyst data is present.
    #[must_use]
    pub fn has_analyst_data(&self) -> bool {
        self.analyst_estimates.as_ref().is_some_and(|e| !e.is_empty())
            || self.price_targets.as_ref().is_some_and(|t| !t.is_empty())
            || self.price_target_summary.is_some()
            || self.analyst_grades.as_ref().is_some_and(|g| !g.is_empty())
    }

    /// Whether any ownership data is present.
    #[must_use]
    pub fn has_ownership_data(&self) -> bool {
        self.institutional_holders
            .as_ref()
            .is_some_and(|h| !h.is_empty())
            || self.insider_trades.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Per-slot counts of what was populated, for quick inspection.
    #[must_use]
    pub fn summary(&self) -> serde_json::Value {
        fn len<T>(v: &Option<Vec<T>>) -> usize {
            v.as_ref().map_or(0, Vec::len)
        }
        json!({
            "symbol": self.symbol,
            "has_quote": self.quote.is_some(),
            "has_profile": self.profile.is_some(),
            "income_statements_count": self.income_statements.len(),
            "balance_sheets_count": self.balance_sheets.len(),
            "cash_flow_statements_count": self.cash_flow_statements.len(),
            "key_metrics_count": len(&self.key_metrics),
            "financial_ratios_count": len(&self.financial_ratios),
            "institutional_holders_count": len(&self.institutional_holders),
            "insider_trades_count": len(&self.insider_trades),
            "analyst_estimates_count": len(&self.analyst_estimates),
            "historical_prices_count": len(&self.historical_prices),
            "transcripts_count": len(&self.transcripts),
            "sec_filings_count": len(&self.sec_filings),
            "news_count": len(&self.news),
            "cache_hit": self.cache_hit,
        })
    }
}
