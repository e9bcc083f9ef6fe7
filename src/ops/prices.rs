use chrono::{Duration, Utc};

use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::HistoricalPrice;
use crate::ops::{decode_rows, symbol_query};

pub(crate) async fn historical_prices(
    client: &FmpClient,
    symbol: &str,
    days: u32,
) -> Result<Vec<HistoricalPrice>, FmpError> {
    let to = Utc::now().date_naive();
    let from = to - Duration::days(i64::from(days));
    let mut query = symbol_query(symbol);
    query.push(("from", from.format("%Y-%m-%d").to_string()));
    query.push(("to", to.format("%Y-%m-%d").to_string()));
    let rows = client
        .fetch_list(Endpoint::HistoricalPrices, &[], &query)
        .await?;
    decode_rows(rows, "historical price")
}
