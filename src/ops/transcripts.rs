use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::EarningsTranscript;
use crate::ops::{decode_rows, symbol_query};

pub(crate) async fn transcripts(
    client: &FmpClient,
    symbol: &str,
    limit: u32,
) -> Result<Vec<EarningsTranscript>, FmpError> {
    let mut query = symbol_query(symbol);
    query.push(("limit", limit.to_string()));
    let rows = client
        .fetch_list(Endpoint::EarningCallTranscript, &[], &query)
        .await?;
    decode_rows(rows, "earnings transcript")
}
