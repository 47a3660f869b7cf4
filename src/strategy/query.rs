//! Strategies selectable through `/api/strategies?strategy=<name>`.

use crate::strategy::policy::CachePolicy;

/// A caching strategy requested by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One hour at the edge.
    Long,
    /// Thirty seconds at the edge.
    Short,
    /// Never cached.
    NoCache,
    /// One minute fresh, five minutes stale-while-revalidate.
    Stale,
    /// Five minutes at the edge; anything unrecognised lands here.
    Default,
}

impl Strategy {
    /// Map a query value to a strategy. Missing or unknown values are `Default`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("long") => Strategy::Long,
            Some("short") => Strategy::Short,
            Some("none") => Strategy::NoCache,
            Some("stale") => Strategy::Stale,
            _ => Strategy::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Long => "long",
            Strategy::Short => "short",
            Strategy::NoCache => "none",
            Strategy::Stale => "stale",
            Strategy::Default => "default",
        }
    }

    pub fn policy(self) -> CachePolicy {
        let (cache_control, cdn) = match self {
            Strategy::Long => ("public, s-maxage=3600, stale-while-revalidate=7200", "max-age=3600"),
            Strategy::Short => ("public, s-maxage=30, stale-while-revalidate=60", "max-age=30"),
            Strategy::NoCache => ("no-cache, no-store, must-revalidate", "no-cache"),
            Strategy::Stale => ("public, s-maxage=60, stale-while-revalidate=300", "max-age=60"),
            Strategy::Default => ("public, s-maxage=300, stale-while-revalidate=600", "max-age=300"),
        };

        CachePolicy {
            cache_control,
            cdn_cache_control: Some(cdn),
            vendor_cdn_cache_control: None,
            label: self.name(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Strategy::Long => "Long cache (1 hour) - suited to static content",
            Strategy::Short => "Short cache (30 seconds) - for semi-dynamic content",
            Strategy::NoCache => "No cache - data is always fresh",
            Strategy::Stale => "Stale-while-revalidate - balances speed and freshness",
            Strategy::Default => "Default cache (5 minutes) - a balanced choice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        assert_eq!(Strategy::from_query(Some("long")), Strategy::Long);
        assert_eq!(Strategy::from_query(Some("short")), Strategy::Short);
        assert_eq!(Strategy::from_query(Some("none")), Strategy::NoCache);
        assert_eq!(Strategy::from_query(Some("stale")), Strategy::Stale);
        assert_eq!(Strategy::from_query(Some("default")), Strategy::Default);
        assert_eq!(Strategy::from_query(Some("LONG")), Strategy::Default);
        assert_eq!(Strategy::from_query(None), Strategy::Default);
    }

    #[test]
    fn test_names_round_trip() {
        let all = [
            Strategy::Long,
            Strategy::Short,
            Strategy::NoCache,
            Strategy::Stale,
            Strategy::Default,
        ];
        for strategy in all {
            assert_eq!(Strategy::from_query(Some(strategy.name())), strategy);
            assert_eq!(strategy.policy().label, strategy.name());
        }
    }

    #[test]
    fn test_policies() {
        let long = Strategy::Long.policy();
        assert_eq!(long.cache_control, "public, s-maxage=3600, stale-while-revalidate=7200");
        assert_eq!(long.cdn_cache_control, Some("max-age=3600"));

        let none = Strategy::NoCache.policy();
        assert_eq!(none.cdn_cache_control, Some("no-cache"));
        assert_eq!(none.cache_control, "no-cache, no-store, must-revalidate");

        let default = Strategy::Default.policy();
        assert_eq!(default.cache_control, CachePolicy::EDGE_API.cache_control);
        assert_eq!(default.vendor_cdn_cache_control, None);
    }
}
