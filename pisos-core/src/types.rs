//! Shared data structures for the pisos pipeline.

use serde::{Deserialize, Serialize};

/// One relayed listing record.
///
/// Records are produced by the remote scraping service and passed through
/// verbatim; this system never interprets or mutates their contents. The
/// underlying map preserves insertion order (`serde_json` is built with
/// `preserve_order`), so published records keep the field order the remote
/// service emitted.
pub type ListingRecord = serde_json::Map<String, serde_json::Value>;

/// Normalized caller search intent.
///
/// Constructed once per run from the raw host payload and immutable
/// afterwards. Invariants: `city` is never empty; `max_price`, if present,
/// is greater than zero (zero and absent both mean "no upper bound").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Free-form city to search in.
    pub city: String,
    /// Optional price ceiling; `None` means no upper bound.
    pub max_price: Option<u64>,
    /// Rent (`true`) vs. sale (`false`).
    pub for_rent: bool,
}

impl SearchSpec {
    /// A sale search with no price ceiling.
    pub fn sale(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            max_price: None,
            for_rent: false,
        }
    }

    /// A rental search with no price ceiling.
    pub fn rent(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            max_price: None,
            for_rent: true,
        }
    }

    /// Set the price ceiling. A zero ceiling is kept as "no ceiling".
    #[must_use]
    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = (max_price > 0).then_some(max_price);
        self
    }
}

/// Fallback values substituted for absent or blank input fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDefaults {
    /// City used when the payload carries none.
    pub city: String,
    /// Price ceiling used when the payload carries none.
    pub max_price: u64,
    /// Operation used when the payload carries none.
    pub for_rent: bool,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            city: "madrid".to_string(),
            max_price: 200_000,
            for_rent: false,
        }
    }
}

/// Opaque reference to a remote result collection.
///
/// Returned by [`crate::connector::SearchProvider::start_search`] and resolved
/// by `fetch_records`. The inner id belongs to the remote platform; this
/// system never parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetHandle(String);

impl DatasetHandle {
    /// Wrap a platform-issued dataset id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatasetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anonymizing proxy pass-through for the remote platform.
///
/// Interpreted by the platform, not by this system; connectors forward it
/// inside the request payload in whatever spelling their platform expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyOptions {
    /// Proxy pools/categories to request (e.g. "RESIDENTIAL").
    pub groups: Vec<String>,
    /// Optional exit-country constraint.
    pub country: Option<String>,
}

/// Transport-level options passed alongside the normalized request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportOptions {
    /// Route the remote scrape through an anonymizing proxy layer.
    pub proxy: Option<ProxyOptions>,
}

impl TransportOptions {
    /// Transport options routing through the given proxy groups.
    pub fn with_proxy_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            proxy: Some(ProxyOptions {
                groups: groups.into_iter().map(Into::into).collect(),
                country: None,
            }),
        }
    }
}

/// Outcome of one relay run: the resolved spec and the records republished
/// verbatim, in the order the remote service produced them.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// The resolved search spec this run executed.
    pub spec: SearchSpec,
    /// Relayed records, unchanged and in fetch order.
    pub records: Vec<ListingRecord>,
}

impl RunReport {
    /// Number of records relayed.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True when the remote run produced no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
