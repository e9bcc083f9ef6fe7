//! Typed payload carried by one completed section.

use serde_json::Value;

use crate::aggregate::section::Section;
use crate::core::{FmpClient, FmpError};
use crate::model::{
    AftermarketQuote, AnalystEstimate, AnalystGrade, BalanceSheet, CashFlowStatement,
    CompanyProfile, DataRequest, DcfValuation, DividendRecord, EarningsEvent, EarningsTranscript,
    EnterpriseValue, Executive, FinancialRatios, FinancialScores, HistoricalPrice, IncomeStatement,
    InsiderTrade, InstitutionalHolder, KeyMetrics, NewsArticle, PriceTarget, PriceTargetSummary,
    Quote, SecFiling, StockSplit, TickerData,
};
use crate::ops;

/// Upstream page size for analyst grades; the feed has no period scoping.
const GRADES_LIMIT: u32 = 10;

/// The decoded result of one section, ready to be folded into the aggregate
/// or serialized for the cache.
#[derive(Clone, Debug)]
pub(crate) enum SectionData {
    Quote(Option<Quote>),
    AftermarketQuote(Option<AftermarketQuote>),
    Profile(Option<CompanyProfile>),
    Executives(Vec<Executive>),
    Dividends(Vec<DividendRecord>),
    Splits(Vec<StockSplit>),
    EarningsCalendar(Vec<EarningsEvent>),
    IncomeStatements(Vec<IncomeStatement>),
    BalanceSheets(Vec<BalanceSheet>),
    CashFlowStatements(Vec<CashFlowStatement>),
    KeyMetrics(Vec<KeyMetrics>),
    FinancialRatios(Vec<FinancialRatios>),
    FinancialScores(Vec<FinancialScores>),
    Dcf(Option<DcfValuation>),
    EnterpriseValues(Vec<EnterpriseValue>),
    AnalystEstimates(Vec<AnalystEstimate>),
    PriceTargets(Vec<PriceTarget>),
    PriceTargetSummary(Option<PriceTargetSummary>),
    AnalystGrades(Vec<AnalystGrade>),
    InstitutionalHolders(Vec<InstitutionalHolder>),
    InsiderTrades(Vec<InsiderTrade>),
    HistoricalPrices(Vec<HistoricalPrice>),
    Transcripts(Vec<EarningsTranscript>),
    SecFilings(Vec<SecFiling>),
    News(Vec<NewsArticle>),
}

fn decode<T: serde::de::DeserializeOwned>(section: Section, value: Value) -> Result<T, FmpError> {
    serde_json::from_value(value)
        .map_err(|e| FmpError::Data(format!("cached {}: {e}", section.data_type())))
}

impl SectionData {
    /// Fetch one section from the network and decode it.
    pub(crate) async fn fetch(
        client: &FmpClient,
        req: &DataRequest,
        section: Section,
    ) -> Result<Self, FmpError> {
        let symbol = req.symbol.as_str();
        Ok(match section {
            Section::Quote => Self::Quote(ops::quote::quote(client, symbol).await?),
            Section::AftermarketQuote => {
                Self::AftermarketQuote(ops::quote::aftermarket_quote(client, symbol).await?)
            }
            Section::Profile => Self::Profile(ops::profile::profile(client, symbol).await?),
            Section::Executives => {
                Self::Executives(ops::profile::executives(client, symbol).await?)
            }
            Section::Dividends => Self::Dividends(ops::events::dividends(client, symbol).await?),
            Section::Splits => Self::Splits(ops::events::splits(client, symbol).await?),
            Section::EarningsCalendar => {
                Self::EarningsCalendar(ops::events::earnings_calendar(client, symbol).await?)
            }
            Section::IncomeStatements => Self::IncomeStatements(
                ops::fundamentals::income_statements(
                    client,
                    symbol,
                    req.period_type,
                    req.periods,
                )
                .await?,
            ),
            Section::BalanceSheets => Self::BalanceSheets(
                ops::fundamentals::balance_sheets(client, symbol, req.period_type, req.periods)
                    .await?,
            ),
            Section::CashFlowStatements => Self::CashFlowStatements(
                ops::fundamentals::cash_flow_statements(
                    client,
                    symbol,
                    req.period_type,
                    req.periods,
                )
                .await?,
            ),
            Section::KeyMetrics => Self::KeyMetrics(
                ops::fundamentals::key_metrics(client, symbol, req.period_type, req.periods)
                    .await?,
            ),
            Section::FinancialRatios => Self::FinancialRatios(
                ops::fundamentals::financial_ratios(client, symbol, req.period_type, req.periods)
                    .await?,
            ),
            Section::FinancialScores => {
                Self::FinancialScores(ops::fundamentals::financial_scores(client, symbol).await?)
            }
            Section::Dcf => Self::Dcf(ops::valuation::dcf(client, symbol).await?),
            Section::EnterpriseValues => Self::EnterpriseValues(
                ops::valuation::enterprise_values(client, symbol, req.period_type, req.periods)
                    .await?,
            ),
            Section::AnalystEstimates => Self::AnalystEstimates(
                ops::analyst::analyst_estimates(client, symbol, req.period_type, req.periods)
                    .await?,
            ),
            Section::PriceTargets => {
                Self::PriceTargets(ops::analyst::price_targets(client, symbol).await?)
            }
            Section::PriceTargetSummary => {
                Self::PriceTargetSummary(ops::analyst::price_target_summary(client, symbol).await?)
            }
            Section::AnalystGrades => {
                Self::AnalystGrades(ops::analyst::analyst_grades(client, symbol, GRADES_LIMIT).await?)
            }
            Section::InstitutionalHolders => Self::InstitutionalHolders(
                ops::ownership::institutional_holders(client, symbol).await?,
            ),
            Section::InsiderTrades => Self::InsiderTrades(
                ops::ownership::insider_trades(client, symbol, req.insider_trades_days).await?,
            ),
            Section::HistoricalPrices => Self::HistoricalPrices(
                ops::prices::historical_prices(client, symbol, req.historical_days).await?,
            ),
            Section::Transcripts => Self::Transcripts(
                ops::transcripts::transcripts(client, symbol, req.transcript_count).await?,
            ),
            Section::SecFilings => Self::SecFilings(
                ops::filings::sec_filings(
                    client,
                    symbol,
                    req.sec_filing_types.as_deref(),
                    req.sec_filing_count,
                )
                .await?,
            ),
            Section::News => Self::News(ops::news::stock_news(client, symbol, req.news_count).await?),
        })
    }

    /// Rebuild the typed payload from a cached JSON snapshot.
    pub(crate) fn decode_cached(section: Section, value: Value) -> Result<Self, FmpError> {
        Ok(match section {
            Section::Quote => Self::Quote(decode(section, value)?),
            Section::AftermarketQuote => Self::AftermarketQuote(decode(section, value)?),
            Section::Profile => Self::Profile(decode(section, value)?),
            Section::Executives => Self::Executives(decode(section, value)?),
            Section::Dividends => Self::Dividends(decode(section, value)?),
            Section::Splits => Self::Splits(decode(section, value)?),
            Section::EarningsCalendar => Self::EarningsCalendar(decode(section, value)?),
            Section::IncomeStatements => Self::IncomeStatements(decode(section, value)?),
            Section::BalanceSheets => Self::BalanceSheets(decode(section, value)?),
            Section::CashFlowStatements => Self::CashFlowStatements(decode(section, value)?),
            Section::KeyMetrics => Self::KeyMetrics(decode(section, value)?),
            Section::FinancialRatios => Self::FinancialRatios(decode(section, value)?),
            Section::FinancialScores => Self::FinancialScores(decode(section, value)?),
            Section::Dcf => Self::Dcf(decode(section, value)?),
            Section::EnterpriseValues => Self::EnterpriseValues(decode(section, value)?),
            Section::AnalystEstimates => Self::AnalystEstimates(decode(section, value)?),
            Section::PriceTargets => Self::PriceTargets(decode(section, value)?),
            Section::PriceTargetSummary => Self::PriceTargetSummary(decode(section, value)?),
            Section::AnalystGrades => Self::AnalystGrades(decode(section, value)?),
            Section::InstitutionalHolders => Self::InstitutionalHolders(decode(section, value)?),
            Section::InsiderTrades => Self::InsiderTrades(decode(section, value)?),
            Section::HistoricalPrices => Self::HistoricalPrices(decode(section, value)?),
            Section::Transcripts => Self::Transcripts(decode(section, value)?),
            Section::SecFilings => Self::SecFilings(decode(section, value)?),
            Section::News => Self::News(decode(section, value)?),
        })
    }

    /// Whether the upstream returned no data for this section. Empty results
    /// are valid but must not be persisted: under a permanent TTL a cached
    /// empty would pin the section to "no data" forever.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Self::Quote(v) => v.is_none(),
            Self::AftermarketQuote(v) => v.is_none(),
            Self::Profile(v) => v.is_none(),
            Self::Dcf(v) => v.is_none(),
            Self::PriceTargetSummary(v) => v.is_none(),
            Self::Executives(v) => v.is_empty(),
            Self::Dividends(v) => v.is_empty(),
            Self::Splits(v) => v.is_empty(),
            Self::EarningsCalendar(v) => v.is_empty(),
            Self::IncomeStatements(v) => v.is_empty(),
            Self::BalanceSheets(v) => v.is_empty(),
            Self::CashFlowStatements(v) => v.is_empty(),
            Self::KeyMetrics(v) => v.is_empty(),
            Self::FinancialRatios(v) => v.is_empty(),
            Self::FinancialScores(v) => v.is_empty(),
            Self::EnterpriseValues(v) => v.is_empty(),
            Self::AnalystEstimates(v) => v.is_empty(),
            Self::PriceTargets(v) => v.is_empty(),
            Self::AnalystGrades(v) => v.is_empty(),
            Self::InstitutionalHolders(v) => v.is_empty(),
            Self::InsiderTrades(v) => v.is_empty(),
            Self::HistoricalPrices(v) => v.is_empty(),
            Self::Transcripts(v) => v.is_empty(),
            Self::SecFilings(v) => v.is_empty(),
            Self::News(v) => v.is_empty(),
        }
    }

    /// JSON snapshot of the payload, for the cache.
    pub(crate) fn to_cache_payload(&self) -> Result<Value, FmpError> {
        let value = match self {
            Self::Quote(v) => serde_json::to_value(v),
            Self::AftermarketQuote(v) => serde_json::to_value(v),
            Self::Profile(v) => serde_json::to_value(v),
            Self::Executives(v) => serde_json::to_value(v),
            Self::Dividends(v) => serde_json::to_value(v),
            Self::Splits(v) => serde_json::to_value(v),
            Self::EarningsCalendar(v) => serde_json::to_value(v),
            Self::IncomeStatements(v) => serde_json::to_value(v),
            Self::BalanceSheets(v) => serde_json::to_value(v),
            Self::CashFlowStatements(v) => serde_json::to_value(v),
            Self::KeyMetrics(v) => serde_json::to_value(v),
            Self::FinancialRatios(v) => serde_json::to_value(v),
            Self::FinancialScores(v) => serde_json::to_value(v),
            Self::Dcf(v) => serde_json::to_value(v),
            Self::EnterpriseValues(v) => serde_json::to_value(v),
            Self::AnalystEstimates(v) => serde_json::to_value(v),
            Self::PriceTargets(v) => serde_json::to_value(v),
            Self::PriceTargetSummary(v) => serde_json::to_value(v),
            Self::AnalystGrades(v) => serde_json::to_value(v),
            Self::InstitutionalHolders(v) => serde_json::to_value(v),
            Self::InsiderTrades(v) => serde_json::to_value(v),
            Self::HistoricalPrices(v) => serde_json::to_value(v),
            Self::Transcripts(v) => serde_json::to_value(v),
            Self::SecFilings(v) => serde_json::to_value(v),
            Self::News(v) => serde_json::to_value(v),
        };
        value.map_err(FmpError::Json)
    }

    /// Fold the payload into its slot of the aggregate.
    pub(crate) fn apply(self, data: &mut TickerData) {
        match self {
            Self::Quote(v) => data.quote = v,
            Self::AftermarketQuote(v) => data.aftermarket_quote = v,
            Self::Profile(v) => data.profile = v,
            Self::Executives(v) => data.executives = Some(v),
            Self::Dividends(v) => data.dividends = Some(v),
            Self::Splits(v) => data.splits = Some(v),
            Self::EarningsCalendar(v) => data.earnings_calendar = Some(v),
            Self::IncomeStatements(v) => data.income_statements = v,
            Self::BalanceSheets(v) => data.balance_sheets = v,
            Self::CashFlowStatements(v) => data.cash_flow_statements = v,
            Self::KeyMetrics(v) => data.key_metrics = Some(v),
            Self::FinancialRatios(v) => data.financial_ratios = Some(v),
            Self::FinancialScores(v) => data.financial_scores = Some(v),
            Self::Dcf(v) => data.dcf_valuation = v,
            Self::EnterpriseValues(v) => data.enterprise_values = Some(v),
            Self::AnalystEstimates(v) => data.analyst_estimates = Some(v),
            Self::PriceTargets(v) => data.price_targets = Some(v),
            Self::PriceTargetSummary(v) => data.price_target_summary = v,
            Self::AnalystGrades(v) => data.analyst_grades = Some(v),
            Self::InstitutionalHolders(v) => data.institutional_holders = Some(v),
            Self::InsiderTrades(v) => data.insider_trades = Some(v),
            Self::HistoricalPrices(v) => data.historical_prices = Some(v),
            Self::Transcripts(v) => data.transcripts = Some(v),
            Self::SecFilings(v) => data.sec_filings = Some(v),
            Self::News(v) => data.news = Some(v),
        }
    }
}
