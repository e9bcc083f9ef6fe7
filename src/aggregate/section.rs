//! The section catalog: one variant per independently fetchable slice of a
//! ticker aggregate.

use std::collections::BTreeSet;

use crate::model::DataRequest;

/// One independently fetched and cached slice of [`TickerData`].
///
/// Ordering is the dispatch order; it is stable so that request expansion is
/// deterministic.
///
/// [`TickerData`]: crate::model::TickerData
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Quote,
    AftermarketQuote,
    Profile,
    Executives,
    Dividends,
    Splits,
    EarningsCalendar,
    IncomeStatements,
    BalanceSheets,
    CashFlowStatements,
    KeyMetrics,
    FinancialRatios,
    FinancialScores,
    Dcf,
    EnterpriseValues,
    AnalystEstimates,
    PriceTargets,
    PriceTargetSummary,
    AnalystGrades,
    InstitutionalHolders,
    InsiderTrades,
    HistoricalPrices,
    Transcripts,
    SecFilings,
    News,
}

impl Section {
    /// Stable name used as the cache data-type key and in diagnostics.
    #[must_use]
    pub const fn data_type(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::AftermarketQuote => "aftermarket_quote",
            Self::Profile => "profile",
            Self::Executives => "executives",
            Self::Dividends => "dividends",
            Self::Splits => "splits",
            Self::EarningsCalendar => "earnings_calendar",
            Self::IncomeStatements => "income_statements",
            Self::BalanceSheets => "balance_sheets",
            Self::CashFlowStatements => "cash_flow_statements",
            Self::KeyMetrics => "key_metrics",
            Self::FinancialRatios => "financial_ratios",
            Self::FinancialScores => "financial_scores",
            Self::Dcf => "dcf_valuation",
            Self::EnterpriseValues => "enterprise_values",
            Self::AnalystEstimates => "analyst_estimates",
            Self::PriceTargets => "price_targets",
            Self::PriceTargetSummary => "price_target_summary",
            Self::AnalystGrades => "analyst_grades",
            Self::InstitutionalHolders => "institutional_holders",
            Self::InsiderTrades => "insider_trades",
            Self::HistoricalPrices => "historical_prices",
            Self::Transcripts => "transcripts",
            Self::SecFilings => "sec_filings",
            Self::News => "news",
        }
    }

    /// Whether this section's cache key must carry the period parameters.
    #[must_use]
    pub const fn period_scoped(self) -> bool {
        matches!(
            self,
            Self::IncomeStatements
                | Self::BalanceSheets
                | Self::CashFlowStatements
                | Self::KeyMetrics
                | Self::FinancialRatios
                | Self::EnterpriseValues
                | Self::AnalystEstimates
        )
    }
}

/// Expand a request's flags into the set of sections to dispatch.
///
/// The `include_fundamentals` umbrella covers the six fundamental sections
/// and the `include_price_targets` flag covers both price-target sections;
/// the set makes the expansion idempotent with the individual flags, so a
/// section is dispatched at most once per call.
#[must_use]
pub fn requested_sections(req: &DataRequest) -> BTreeSet<Section> {
    let mut sections = BTreeSet::new();
    let mut add = |flag: bool, section: Section| {
        if flag {
            sections.insert(section);
        }
    };

    add(req.include_quote, Section::Quote);
    add(req.include_aftermarket_quote, Section::AftermarketQuote);
    add(req.include_profile, Section::Profile);
    add(req.include_executives, Section::Executives);
    add(req.include_dividends, Section::Dividends);
    add(req.include_splits, Section::Splits);
    add(req.include_earnings_calendar, Section::EarningsCalendar);

    let fundamentals = req.include_fundamentals;
    add(
        fundamentals || req.include_income_statements,
        Section::IncomeStatements,
    );
    add(
        fundamentals || req.include_balance_sheets,
        Section::BalanceSheets,
    );
    add(
        fundamentals || req.include_cash_flows,
        Section::CashFlowStatements,
    );
    add(fundamentals || req.include_key_metrics, Section::KeyMetrics);
    add(fundamentals || req.include_ratios, Section::FinancialRatios);
    add(
        fundamentals || req.include_financial_scores,
        Section::FinancialScores,
    );

    add(req.include_dcf, Section::Dcf);
    add(req.include_enterprise_values, Section::EnterpriseValues);
    add(req.include_analyst_estimates, Section::AnalystEstimates);
    add(req.include_price_targets, Section::PriceTargets);
    add(req.include_price_targets, Section::PriceTargetSummary);
    add(req.include_analyst_grades, Section::AnalystGrades);
    add(
        req.include_institutional_holders,
        Section::InstitutionalHolders,
    );
    add(req.include_insider_trades, Section::InsiderTrades);
    add(req.include_historical_prices, Section::HistoricalPrices);
    add(req.include_transcripts, Section::Transcripts);
    add(req.include_sec_filings, Section::SecFilings);
    add(req.include_news, Section::News);

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataRequest;

    #[test]
    fn fundamentals_umbrella_expands_once() {
        let req = DataRequest::builder("AAPL")
            .fundamentals(true)
            .income_statements(true)
            .build()
            .unwrap();
        let sections = requested_sections(&req);
        assert!(sections.contains(&Section::IncomeStatements));
        assert!(sections.contains(&Section::FinancialScores));
        assert_eq!(sections.len(), 6);
    }

    #[test]
    fn price_targets_flag_covers_both_sections() {
        let req = DataRequest::builder("AAPL")
            .price_targets(true)
            .build()
            .unwrap();
        let sections = requested_sections(&req);
        assert_eq!(sections.len(), 2);
        assert!(sections.contains(&Section::PriceTargets));
        assert!(sections.contains(&Section::PriceTargetSummary));
    }

    #[test]
    fn empty_request_expands_to_nothing() {
        let req = DataRequest::builder("AAPL").build().unwrap();
        assert!(requested_sections(&req).is_empty());
    }

    #[test]
    fn period_scoped_sections_are_exactly_the_period_parameterized_ones() {
        let scoped: Vec<Section> = requested_sections(
            &DataRequest::builder("AAPL").full_analysis().build().unwrap(),
        )
        .into_iter()
        .filter(|s| s.period_scoped())
        .collect();
        assert_eq!(
            scoped,
            vec![
                Section::IncomeStatements,
                Section::BalanceSheets,
                Section::CashFlowStatements,
                Section::KeyMetrics,
                Section::FinancialRatios,
                Section::EnterpriseValues,
                Section::AnalystEstimates,
            ]
        );
    }
}
