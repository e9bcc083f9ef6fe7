use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{AftermarketQuote, Quote};
use crate::ops::{decode_first, symbol_query};

pub(crate) async fn quote(client: &FmpClient, symbol: &str) -> Result<Option<Quote>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::Quote, &[], &symbol_query(symbol))
        .await?;
    decode_first(rows, "quote")
}

pub(crate) async fn aftermarket_quote(
    client: &FmpClient,
    symbol: &str,
) -> Result<Option<AftermarketQuote>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::AftermarketQuote, &[], &symbol_query(symbol))
        .await?;
    decode_first(rows, "aftermarket quote")
}
