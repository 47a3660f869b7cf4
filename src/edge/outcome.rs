//! Cache outcome vocabulary reported by the edge proxy.

use std::fmt;

use serde::{Serialize, Serializer};

/// What the edge proxy says happened to this request in its cache.
///
/// Matching is exact: `hit` is not `HIT` and ends up in [`CacheOutcome::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheOutcome {
    Hit,
    Miss,
    Bypass,
    Expired,
    Stale,
    /// Any value outside the known vocabulary, kept verbatim.
    Other(String),
}

impl CacheOutcome {
    pub fn parse(value: &str) -> Self {
        match value {
            "HIT" => CacheOutcome::Hit,
            "MISS" => CacheOutcome::Miss,
            "BYPASS" => CacheOutcome::Bypass,
            "EXPIRED" => CacheOutcome::Expired,
            "STALE" => CacheOutcome::Stale,
            other => CacheOutcome::Other(other.to_string()),
        }
    }

    /// The raw header value.
    pub fn as_str(&self) -> &str {
        match self {
            CacheOutcome::Hit => "HIT",
            CacheOutcome::Miss => "MISS",
            CacheOutcome::Bypass => "BYPASS",
            CacheOutcome::Expired => "EXPIRED",
            CacheOutcome::Stale => "STALE",
            CacheOutcome::Other(value) => value,
        }
    }

    /// Bounded label for metrics; unknown values collapse to `OTHER`.
    pub fn metric_label(&self) -> &'static str {
        match self {
            CacheOutcome::Hit => "HIT",
            CacheOutcome::Miss => "MISS",
            CacheOutcome::Bypass => "BYPASS",
            CacheOutcome::Expired => "EXPIRED",
            CacheOutcome::Stale => "STALE",
            CacheOutcome::Other(_) => "OTHER",
        }
    }

    /// Human-readable explanation shown to visitors.
    pub fn explanation(&self) -> String {
        match self {
            CacheOutcome::Hit => "served from edge cache".to_string(),
            CacheOutcome::Miss => "cache miss — generated at origin".to_string(),
            CacheOutcome::Bypass => "cache bypassed — dynamic content".to_string(),
            CacheOutcome::Expired => "cache expired — regenerating".to_string(),
            CacheOutcome::Stale => "stale content served while regenerating".to_string(),
            CacheOutcome::Other(value) => format!("status: {}", value),
        }
    }
}

impl fmt::Display for CacheOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CacheOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let table = [
            ("HIT", CacheOutcome::Hit, "served from edge cache"),
            ("MISS", CacheOutcome::Miss, "cache miss — generated at origin"),
            ("BYPASS", CacheOutcome::Bypass, "cache bypassed — dynamic content"),
            ("EXPIRED", CacheOutcome::Expired, "cache expired — regenerating"),
            ("STALE", CacheOutcome::Stale, "stale content served while regenerating"),
        ];

        for (raw, expected, explanation) in table {
            let outcome = CacheOutcome::parse(raw);
            assert_eq!(outcome, expected);
            assert_eq!(outcome.as_str(), raw);
            assert_eq!(outcome.explanation(), explanation);
            assert_eq!(outcome.metric_label(), raw);
        }
    }

    #[test]
    fn test_unknown_value_passes_through() {
        let outcome = CacheOutcome::parse("REVALIDATED");
        assert_eq!(outcome, CacheOutcome::Other("REVALIDATED".into()));
        assert_eq!(outcome.as_str(), "REVALIDATED");
        assert_eq!(outcome.explanation(), "status: REVALIDATED");
        assert_eq!(outcome.metric_label(), "OTHER");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(CacheOutcome::parse("hit"), CacheOutcome::Other("hit".into()));
        assert_eq!(CacheOutcome::parse("HIT"), CacheOutcome::Hit);
    }

    #[test]
    fn test_serializes_as_raw_string() {
        let json = serde_json::to_string(&CacheOutcome::Stale).unwrap();
        assert_eq!(json, "\"STALE\"");
        let json = serde_json::to_string(&CacheOutcome::parse("DYNAMIC")).unwrap();
        assert_eq!(json, "\"DYNAMIC\"");
    }
}
