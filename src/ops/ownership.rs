use chrono::{Duration, Utc};

use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{InsiderTrade, InstitutionalHolder};
use crate::ops::{decode_rows, symbol_query};

pub(crate) async fn institutional_holders(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<InstitutionalHolder>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::InstitutionalHolders, &[], &symbol_query(symbol))
        .await?;
    decode_rows(rows, "institutional holder")
}

pub(crate) async fn insider_trades(
    client: &FmpClient,
    symbol: &str,
    days: u32,
) -> Result<Vec<InsiderTrade>, FmpError> {
    let to = Utc::now().date_naive();
    let from = to - Duration::days(i64::from(days));
    let mut query = symbol_query(symbol);
    query.push(("from", from.format("%Y-%m-%d").to_string()));
    query.push(("to", to.format("%Y-%m-%d").to_string()));
    let rows = client
        .fetch_list(Endpoint::InsiderTrading, &[], &query)
        .await?;
    decode_rows(rows, "insider trade")
}
