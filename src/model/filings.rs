use serde::{Deserialize, Serialize};

/// One SEC filing reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecFiling {
    pub symbol: String,
    /// SEC CIK number.
    pub cik: Option<String>,
    /// Form type (10-K, 10-Q, 8-K, ...).
    #[serde(rename = "formType", alias = "type")]
    pub filing_type: Option<String>,
    /// Filing timestamp, as reported upstream.
    pub filing_date: Option<String>,
    pub accepted_date: Option<String>,
    pub accession_number: Option<String>,
    /// Link to the filing index on SEC EDGAR.
    pub link: Option<String>,
    /// Link to the filing document itself.
    pub final_link: Option<String>,
}
