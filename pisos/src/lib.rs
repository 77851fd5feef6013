//! Pisos relays property-listing searches through remote scraping platforms.
//!
//! Overview
//! - Resolves a raw host payload into a [`pisos_core::SearchSpec`] via total,
//!   per-field defaulting (nothing is ever rejected at this stage).
//! - Normalizes the spec into the exact request schema the configured remote
//!   provider expects (see [`pisos_core::normalize`]).
//! - Invokes the registered connector and waits for its result collection.
//! - Relays every fetched record verbatim, in order, to an [`OutputSink`];
//!   an empty collection completes the run with a single warning.
//!
//! The pipeline is strictly sequential and owns no state across runs; only a
//! failed remote invocation aborts a run.
//!
//! Examples
//! Building a relay over the mock connector:
//! ```rust,ignore
//! use std::sync::Arc;
//! use pisos::{MemorySink, Pisos, RawSearchPayload};
//!
//! let pisos = Pisos::builder()
//!     .with_connector(Arc::new(pisos_mock::MockConnector::new()))
//!     .build()?;
//!
//! let payload = RawSearchPayload::from_json(Some(r#"{"city": "Barcelona", "forRent": true}"#));
//! let mut sink = MemorySink::new();
//! let report = pisos.run(payload, &mut sink).await?;
//! println!("relayed {} listings", report.count());
//! ```
//!
//! See `pisos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod context;
pub(crate) mod core;
/// Raw host payloads and the total per-field defaulting functions.
pub mod input;
/// The verbatim result relay and its output sinks.
pub mod relay;

pub use core::{Pisos, PisosBuilder};
pub use input::RawSearchPayload;
pub use relay::{JsonLinesSink, MemorySink, OutputSink};

// Re-export core types for convenience
pub use pisos_core::{
    DatasetHandle, ListingRecord, PisosError, ProxyOptions, RemoteRequest, RunReport,
    ScrapeConnector, SearchDefaults, SearchProvider, SearchSpec, TargetSchema, TransportOptions,
    normalize,
};
