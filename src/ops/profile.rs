use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::{CompanyProfile, Executive};
use crate::ops::{decode_first, decode_rows, symbol_query};

pub(crate) async fn profile(
    client: &FmpClient,
    symbol: &str,
) -> Result<Option<CompanyProfile>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::Profile, &[], &symbol_query(symbol))
        .await?;
    decode_first(rows, "company profile")
}

pub(crate) async fn executives(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<Executive>, FmpError> {
    let rows = client
        .fetch_list(Endpoint::Executives, &[], &symbol_query(symbol))
        .await?;
    decode_rows(rows, "executive")
}
