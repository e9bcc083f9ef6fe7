use crate::core::{Endpoint, FmpClient, FmpError};
use crate::model::NewsArticle;
use crate::ops::decode_rows;

pub(crate) async fn stock_news(
    client: &FmpClient,
    symbol: &str,
    limit: u32,
) -> Result<Vec<NewsArticle>, FmpError> {
    let query = vec![
        ("symbols", symbol.to_string()),
        ("limit", limit.to_string()),
    ];
    let rows = client.fetch_list(Endpoint::StockNews, &[], &query).await?;
    decode_rows(rows, "news article")
}
