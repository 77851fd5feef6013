use async_trait::async_trait;

use crate::error::PisosError;
use crate::normalize::RemoteRequest;
use crate::types::{DatasetHandle, ListingRecord, TransportOptions};

/// Focused role trait for connectors that run remote listing searches.
///
/// The two methods mirror the remote platform's two-phase contract: start a
/// scrape and obtain a handle, then resolve the handle into the full ordered
/// record sequence. Both are single blocking async operations; there is no
/// streaming or partial consumption.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Trigger a remote scrape for the normalized request and return a handle
    /// to the result collection it produces.
    ///
    /// `transport` is a pass-through (proxy routing) interpreted by the
    /// platform, not by this system.
    ///
    /// # Errors
    /// Any platform or transport failure is fatal to the run and propagates;
    /// connectors do not retry.
    async fn start_search(
        &self,
        req: &RemoteRequest,
        transport: &TransportOptions,
    ) -> Result<DatasetHandle, PisosError>;

    /// Resolve a handle into the full ordered record sequence it addresses.
    ///
    /// # Errors
    /// Fails if the handle cannot be resolved; an existing-but-empty
    /// collection is `Ok(vec![])`, not an error.
    async fn fetch_records(
        &self,
        handle: &DatasetHandle,
    ) -> Result<Vec<ListingRecord>, PisosError>;
}

/// A connector for one remote scraping platform.
///
/// Capabilities are discovered through the `as_*_provider` directory so the
/// orchestrator can hold connectors as plain trait objects.
pub trait ScrapeConnector: Send + Sync {
    /// Stable connector name, used to tag errors and diagnostics.
    fn name(&self) -> &'static str;

    /// Human-readable platform vendor.
    fn vendor(&self) -> &'static str;

    /// Listing-search capability, if this connector supports it.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }
}
