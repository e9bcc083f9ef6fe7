use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{DcfValuation, EnterpriseValue, PeriodType};
use crate::ops::{decode_first, decode_rows, period_query, symbol_query};

pub(crate) async fn dcf(
    client: &FmpClient,
    symbol: &str,
) -> Result<Option<DcfValuation>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::Dcf, &[], &symbol_query(symbol))
        .await?;
    decode_first(rows, "dcf valuation")
}

pub(crate) async fn enterprise_values(
    client: &FmpClient,
    symbol: &str,
    period_type: PeriodType,
    limit: u32,
) -> Result<Vec<EnterpriseValue>, FmpError> {
    let rows = client
        .fetch_list(
            Endpoint::EnterpriseValue,
            &[],
            &period_query(symbol, period_type, limit),
        )
        .await?;
    decode_rows(rows, "enterprise value")
}
