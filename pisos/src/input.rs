//! The input reader: raw host payloads and total per-field defaulting.
//!
//! Nothing here can fail. Missing payloads become empty payloads, malformed
//! payloads degrade to empty with a warning, and each field falls back to its
//! configured default independently of the others.

use serde::Deserialize;

use pisos_core::{SearchDefaults, SearchSpec};

/// Raw, possibly-absent key/value payload from the host environment.
///
/// All keys are optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSearchPayload {
    /// Requested city, if any.
    #[serde(default)]
    pub city: Option<String>,
    /// Requested price ceiling, if any.
    #[serde(default, rename = "maxPrice")]
    pub max_price: Option<u64>,
    /// Requested operation, if any.
    #[serde(default, rename = "forRent")]
    pub for_rent: Option<bool>,
}

impl RawSearchPayload {
    /// Read a payload from an optional JSON document.
    ///
    /// `None` and malformed documents both coerce to the empty payload; the
    /// latter is logged, since it usually means a host-side misconfiguration.
    #[must_use]
    pub fn from_json(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(doc) => serde_json::from_str(doc).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed input payload");
                Self::default()
            }),
        }
    }
}

/// City fallback: blank and absent cities both take the default.
#[must_use]
pub fn default_city(raw: Option<String>, defaults: &SearchDefaults) -> String {
    match raw {
        Some(city) if !city.trim().is_empty() => city,
        _ => defaults.city.clone(),
    }
}

/// Price-ceiling fallback. An explicit zero means "no upper bound" and is
/// kept as `None` rather than being replaced by the default ceiling.
#[must_use]
pub fn default_max_price(raw: Option<u64>, defaults: &SearchDefaults) -> Option<u64> {
    let price = raw.unwrap_or(defaults.max_price);
    (price > 0).then_some(price)
}

/// Operation fallback.
#[must_use]
pub fn default_for_rent(raw: Option<bool>, defaults: &SearchDefaults) -> bool {
    raw.unwrap_or(defaults.for_rent)
}

/// Resolve a raw payload into an immutable [`SearchSpec`], field by field.
#[must_use]
pub fn resolve(payload: RawSearchPayload, defaults: &SearchDefaults) -> SearchSpec {
    SearchSpec {
        city: default_city(payload.city, defaults),
        max_price: default_max_price(payload.max_price, defaults),
        for_rent: default_for_rent(payload.for_rent, defaults),
    }
}
