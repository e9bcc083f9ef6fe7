use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{
    BalanceSheet, CashFlowStatement, FinancialRatios, FinancialScores, IncomeStatement,
    KeyMetrics, PeriodType,
};
use crate::ops::{decode_rows, period_query, symbol_query};

pub(crate) async fn income_statements(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<IncomeStatement>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::IncomeStatement,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "income statement")
}

pub(crate) async fn balance_sheets(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<BalanceSheet>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::BalanceSheet,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "balance sheet")
}

pub(crate) async fn cash_flow_statements(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<CashFlowStatement>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::CashFlow,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "cash flow statement")
}

pub(crate) async fn key_metrics(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<KeyMetrics>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::KeyMetrics,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "key metrics")
}

pub(crate) async fn financial_ratios(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<FinancialRatios>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::FinancialRatios,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "financial ratios")
}

pub(crate) async fn financial_scores(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<FinancialScores>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::FinancialScores, &[], &symbol_query(symbol))
        .await?;
    decode_rows(rows, "financial scores")
}
