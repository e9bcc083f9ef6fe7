use serde::{Deserialize, Serialize};

/// One earnings-call transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsTranscript {
    pub symbol: String,
    /// Fiscal quarter (1-4).
    pub quarter: Option<i32>,
    /// Fiscal year.
    pub year: Option<i32>,
    /// Call timestamp, as reported upstream.
    pub date: Option<String>,
    /// Full transcript text.
    pub content: Option<String>,
}
