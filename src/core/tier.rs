//! Subscription tiers and tier-based access control.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::endpoints::Endpoint;
use crate::core::error::FmpError;

/// FMP subscription tier. Variant order is the access hierarchy:
/// `Starter < Premium < Ultimate`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry-level plan.
    #[default]
    Starter,
    /// Mid-level plan.
    Premium,
    /// Top-level plan.
    Ultimate,
}

impl Tier {
    /// Whether this tier may call the given endpoint.
    ///
    /// Monotonic in tier rank: if a tier can access an endpoint, every higher
    /// tier can as well.
    #[must_use]
    pub fn can_access(self, endpoint: Endpoint) -> bool {
        self >= endpoint.required_tier()
    }

    /// Default API calls-per-minute budget for this tier, used when the
    /// client builder is not given an explicit rate limit.
    #[must_use]
    pub const fn default_calls_per_minute(self) -> u32 {
        match self {
            Self::Starter => 300,
            Self::Premium => 750,
            Self::Ultimate => 3000,
        }
    }

    /// All endpoints in the catalog accessible to this tier.
    #[must_use]
    pub fn accessible_endpoints(self) -> Vec<Endpoint> {
        Endpoint::ALL
            .iter()
            .copied()
            .filter(|e| self.can_access(*e))
            .collect()
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Premium => "premium",
            Self::Ultimate => "ultimate",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "premium" => Ok(Self::Premium),
            "ultimate" => Ok(Self::Ultimate),
            other => Err(FmpError::Validation(format!("unknown tier '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering_matches_hierarchy() {
        assert!(Tier::Starter < Tier::Premium);
        assert!(Tier::Premium < Tier::Ultimate);
    }

    #[test]
    fn access_is_monotonic_in_rank() {
        for endpoint in Endpoint::ALL {
            if Tier::Starter.can_access(endpoint) {
                assert!(Tier::Premium.can_access(endpoint));
            }
            if Tier::Premium.can_access(endpoint) {
                assert!(Tier::Ultimate.can_access(endpoint));
            }
        }
    }

    #[test]
    fn accessible_endpoint_sets_are_nested() {
        let starter = Tier::Starter.accessible_endpoints();
        let premium = Tier::Premium.accessible_endpoints();
        let ultimate = Tier::Ultimate.accessible_endpoints();

        assert!(starter.iter().all(|e| premium.contains(e)));
        assert!(premium.iter().all(|e| ultimate.contains(e)));
        assert_eq!(ultimate.len(), Endpoint::ALL.len());
        assert!(starter.len() < premium.len());
    }

    #[test]
    fn starter_can_quote_but_not_price_targets() {
        assert!(Tier::Starter.can_access(Endpoint::Quote));
        assert!(!Tier::Starter.can_access(Endpoint::PriceTargetConsensus));
        assert!(Tier::Ultimate.can_access(Endpoint::PriceTargetConsensus));
    }

    #[test]
    fn parse_round_trips() {
        for tier in [Tier::Starter, Tier::Premium, Tier::Ultimate] {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
        assert_eq!(" Premium ".parse::<Tier>().unwrap(), Tier::Premium);
        assert!("platinum".parse::<Tier>().is_err());
    }
}
