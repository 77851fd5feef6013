//! The request normalizer: a pure, total mapping from a [`SearchSpec`] to the
//! payload shape a specific remote provider expects.
//!
//! Provider schemas are not case-insensitive and disagree on field casing,
//! price typing, and enum spelling. Rather than one pipeline per provider,
//! a single [`normalize`] is parameterized by [`TargetSchema`], and the serde
//! derives on the per-variant request structs pin the exact spelling each
//! schema mandates.

use serde::Serialize;

use crate::error::PisosError;
use crate::types::SearchSpec;

/// Fixed upper bound on records a run may fetch; not derived from the spec.
pub const DEFAULT_MAX_ITEMS: u32 = 50;

/// Known remote provider schemas the normalizer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TargetSchema {
    /// Structured camelCase fields, numeric price, operation "sale"/"rent".
    #[default]
    Idealista,
    /// snake_case fields, textual price, operation "for-sale"/"for-rent",
    /// location as a URL-safe hyphenated path token.
    Fotocasa,
}

/// Operation discriminator in the structured-schema spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Properties for sale.
    Sale,
    /// Properties for rent.
    Rent,
}

/// Operation discriminator in the path-segment-schema spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathOperation {
    /// Properties for sale.
    #[serde(rename = "for-sale")]
    ForSale,
    /// Properties for rent.
    #[serde(rename = "for-rent")]
    ForRent,
}

/// Property-category selector; always sent, never derived from the spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    /// Residential homes.
    #[default]
    Homes,
}

/// Request payload for the structured camelCase schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealistaRequest {
    /// Sale vs. rent.
    pub operation: Operation,
    /// Lower-cased, trimmed city query.
    pub location_query: String,
    /// Price ceiling; omitted entirely when the spec has no upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Record-count ceiling.
    pub max_items: u32,
    /// Category selector, spelled exactly as the schema requires.
    pub property_type: PropertyCategory,
}

/// Request payload for the path-segment snake_case schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FotocasaRequest {
    /// Sale vs. rent, in this schema's hyphenated spelling.
    pub operation_type: PathOperation,
    /// URL-safe location token (lower-cased, whitespace collapsed to hyphens).
    pub location: String,
    /// Textual price ceiling; omitted entirely when the spec has no upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    /// Record-count ceiling.
    pub max_items: u32,
    /// Category selector.
    pub category: PropertyCategory,
}

/// Provider-specific payload sent to the external scraping service.
///
/// Derived once per run from the spec, never mutated, discarded after the
/// remote call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RemoteRequest {
    /// Structured-schema payload.
    Idealista(IdealistaRequest),
    /// Path-segment-schema payload.
    Fotocasa(FotocasaRequest),
}

impl RemoteRequest {
    /// The schema variant this request targets.
    #[must_use]
    pub const fn target(&self) -> TargetSchema {
        match self {
            Self::Idealista(_) => TargetSchema::Idealista,
            Self::Fotocasa(_) => TargetSchema::Fotocasa,
        }
    }

    /// Serialize into the JSON value handed to the remote platform.
    ///
    /// # Errors
    /// Returns `Data` if serde rejects the payload, which would indicate a
    /// bug in the request structs rather than bad input.
    pub fn to_value(&self) -> Result<serde_json::Value, PisosError> {
        serde_json::to_value(self).map_err(|e| PisosError::Data(e.to_string()))
    }
}

/// Map a spec onto the given target schema. Pure and total: any spec yields a
/// well-formed request, and the same spec always yields the same request.
#[must_use]
pub fn normalize(spec: &SearchSpec, target: TargetSchema) -> RemoteRequest {
    match target {
        TargetSchema::Idealista => RemoteRequest::Idealista(IdealistaRequest {
            operation: if spec.for_rent {
                Operation::Rent
            } else {
                Operation::Sale
            },
            location_query: location_query(&spec.city),
            max_price: price_ceiling(spec.max_price),
            max_items: DEFAULT_MAX_ITEMS,
            property_type: PropertyCategory::Homes,
        }),
        TargetSchema::Fotocasa => RemoteRequest::Fotocasa(FotocasaRequest {
            operation_type: if spec.for_rent {
                PathOperation::ForRent
            } else {
                PathOperation::ForSale
            },
            location: location_token(&spec.city),
            max_price: price_ceiling(spec.max_price).map(|p| p.to_string()),
            max_items: DEFAULT_MAX_ITEMS,
            category: PropertyCategory::Homes,
        }),
    }
}

/// Lower-cased, trimmed location query for structured schemas.
#[must_use]
pub fn location_query(city: &str) -> String {
    city.trim().to_lowercase()
}

/// URL-safe location token: lower-cased, trimmed, internal whitespace runs
/// collapsed to a single hyphen each.
#[must_use]
pub fn location_token(city: &str) -> String {
    location_query(city)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

// Zero means "no upper bound", same as absent.
fn price_ceiling(max_price: Option<u64>) -> Option<u64> {
    max_price.filter(|p| *p > 0)
}
