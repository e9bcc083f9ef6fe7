//! TTL policies keyed by data-type name.

use std::time::Duration;

/// How long a data type may be served from cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Never expires (historical data).
    Permanent,
    /// 24 hours.
    Long,
    /// 6 hours.
    Medium,
    /// 1 hour.
    Short,
    /// 15 minutes.
    VeryShort,
    /// Never cached.
    None,
}

impl CachePolicy {
    /// TTL for this policy. `None` means "no expiry" for [`Permanent`] and
    /// "not applicable" for [`None`]; use [`should_cache`] to tell them apart.
    ///
    /// [`Permanent`]: CachePolicy::Permanent
    /// [`None`]: CachePolicy::None
    /// [`should_cache`]: CachePolicy::should_cache
    #[must_use]
    pub const fn ttl(self) -> Option<Duration> {
        match self {
            Self::Permanent | Self::None => None,
            Self::Long => Some(Duration::from_secs(24 * 60 * 60)),
            Self::Medium => Some(Duration::from_secs(6 * 60 * 60)),
            Self::Short => Some(Duration::from_secs(60 * 60)),
            Self::VeryShort => Some(Duration::from_secs(15 * 60)),
        }
    }

    /// Whether this policy stores anything at all.
    #[must_use]
    pub const fn should_cache(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Cache policy for a data-type name. Unmapped names default to
/// [`CachePolicy::Medium`].
#[must_use]
pub fn policy_for(data_type: &str) -> CachePolicy {
    match data_type {
        // Real-time data
        "quote" | "aftermarket_quote" => CachePolicy::VeryShort,

        // Changes infrequently
        "profile" | "executives" => CachePolicy::Long,

        // Historical record, immutable once published
        "dividends" | "splits" | "income_statements" | "balance_sheets"
        | "cash_flow_statements" | "historical_prices" | "transcripts" | "sec_filings" => {
            CachePolicy::Permanent
        }

        "key_metrics" | "financial_ratios" | "financial_scores" | "enterprise_values" => {
            CachePolicy::Long
        }

        "dcf_valuation" | "institutional_holders" => CachePolicy::Medium,

        // Updates frequently
        "earnings_calendar" | "analyst_estimates" | "price_targets" | "price_target_summary"
        | "analyst_grades" | "insider_trades" | "news" => CachePolicy::Short,

        _ => CachePolicy::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_data_never_expires() {
        for dt in ["dividends", "income_statements", "historical_prices"] {
            assert_eq!(policy_for(dt), CachePolicy::Permanent);
            assert!(policy_for(dt).should_cache());
            assert!(policy_for(dt).ttl().is_none());
        }
    }

    #[test]
    fn quotes_are_very_short_lived() {
        assert_eq!(policy_for("quote"), CachePolicy::VeryShort);
        assert_eq!(
            policy_for("quote").ttl(),
            Some(Duration::from_secs(15 * 60))
        );
    }

    #[test]
    fn unknown_types_default_to_medium() {
        assert_eq!(policy_for("mystery_blob"), CachePolicy::Medium);
    }
}
