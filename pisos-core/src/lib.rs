//! pisos-core
//!
//! Core types, traits, and request normalization shared across the pisos
//! ecosystem.
//!
//! - `types`: the search specification, transport options, dataset handles,
//!   and the relayed listing records.
//! - `normalize`: the total mapping from a [`types::SearchSpec`] to the
//!   provider-specific [`normalize::RemoteRequest`] payload.
//! - `connector`: the `ScrapeConnector` trait and the `SearchProvider` role
//!   trait implemented by remote-platform connectors.
//!
//! Connectors are async (via `async-trait`) but this crate itself is runtime
//! agnostic; orchestration lives in the `pisos` facade.
#![warn(missing_docs)]

/// Connector role traits and the primary `ScrapeConnector` interface.
pub mod connector;
/// The unified workspace error type.
pub mod error;
/// Target-schema variants and the total request normalizer.
pub mod normalize;
/// Shared data structures for specs, handles, and relayed records.
pub mod types;

pub use connector::{ScrapeConnector, SearchProvider};
pub use error::PisosError;
pub use normalize::{
    DEFAULT_MAX_ITEMS, Operation, PathOperation, PropertyCategory, RemoteRequest, TargetSchema,
    normalize,
};
pub use types::{
    DatasetHandle, ListingRecord, ProxyOptions, RunReport, SearchDefaults, SearchSpec,
    TransportOptions,
};
