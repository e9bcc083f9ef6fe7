use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{AnalystEstimate, AnalystGrade, PeriodType, PriceTarget, PriceTargetSummary};
use crate::ops::{decode_first, decode_rows, period_query, symbol_query};

pub(crate) async fn analyst_estimates(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<AnalystEstimate>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::AnalystEstimates,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "analyst estimate")
}

pub(crate) async fn price_targets(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<PriceTarget>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::PriceTargetConsensus, &[], &symbol_query(symbol))
        .await?;
    decode_rows(rows, "price target")
}

pub(crate) async fn price_target_summary(
    client: &FmpClient,
    symbol: &str,
) -> Result<Option<PriceTargetSummary>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::PriceTargetSummary, &[], &symbol_query(symbol))
        .await?;
    decode_first(rows, "price target summary")
}

pub(crate) async fn analyst_grades(
    client: &FmpClient,
    symbol: &str,
    limit: u32,
) -> Result<Vec<AnalystGrade>, FmpError> {
    let mut query = symbol_query(symbol);
    query.push(("limit", limit.to_string()));
    let rows = client
        .fetch_list(Endpoint::AnalystGrades, &[], &query)
        .await?;
    decode_rows(rows, "analyst grade")
}
