use std::time::Duration;

pub(crate) const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com";

pub(crate) const USER_AGENT: &str =
    concat!("fmp-client-rs/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Vendor convention: a 200 response whose JSON object carries this field is
/// an application-level error.
pub(crate) const ERROR_MESSAGE_FIELD: &str = "Error Message";
