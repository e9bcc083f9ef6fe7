use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::SecFiling;
use crate::ops::{decode_rows, symbol_query};

pub(crate) async fn sec_filings(
    client: &FmpClient,
    symbol: &str,
    filing_types: Option<&[String]>,
    limit: u32,
) -> Result<Vec<SecFiling>, FmpError> {
    let mut query = symbol_query(symbol);
    // The search endpoint filters on a single form type per request; when
    // several are requested the first acts as the primary filter.
    if let Some(form) = filing_types.and_then(|types| types.first()) {
        query.push(("type", form.clone()));
    }
    query.push(("limit", limit.to_string()));
    let rows = client.fetch_list(Endpoint::SecFilings, &[], &query).await?;
    decode_rows(rows, "sec filing")
}
