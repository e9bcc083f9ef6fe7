use serde_json::{Map, Value};

use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{DividendRecord, EarningsEvent, StockSplit};
use crate::ops::{decode_rows, symbol_query};

/// Older corporate-event payloads wrap the list under `historical`; newer
/// ones return a bare array (surfaced by `fetch_object` under `data`).
fn event_rows(mut map: Map<String, Value>) -> Vec<Value> {
    for key in ["historical", "data"] {
        if let Some(Value::Array(rows)) = map.remove(key) {
            return rows;
        }
    }
    vec![]
}

pub(crate) async fn dividends(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<DividendRecord>, FmpError> {
    let map = client
        .fetch_object(Endpoint::DividendsHistorical, &[], &symbol_query(symbol))
        .await?;
    decode_rows(event_rows(map), "dividend record")
}

pub(crate) async fn splits(client: &FmpClient, symbol: &str) -> Result<Vec<StockSplit>, FmpError> {
    let map = client
        .fetch_object(Endpoint::StockSplitHistorical, &[], &symbol_query(symbol))
        .await?;
    decode_rows(event_rows(map), "stock split")
}

pub(crate) async fn earnings_calendar(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<EarningsEvent>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::EarningsCalendar, &[], &symbol_query(symbol))
        .await?;
    decode_rows(rows, "earnings event")
}
