use serde::{Deserialize, Serialize};

/// One news article about a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Stock ticker symbol the article is about.
    pub symbol: Option<String>,
    /// Article headline.
    pub title: String,
    /// Article text or summary snippet.
    pub text: Option<String>,
    /// Direct link to the article.
    pub url: Option<String>,
    /// Publication timestamp, as reported upstream.
    pub published_date: Option<String>,
    /// Publishing site.
    pub site: Option<String>,
    /// Article image URL.
    pub image: Option<String>,
}
