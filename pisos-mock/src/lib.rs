//! Mock connector for CI-safe tests and examples.
//!
//! Serves deterministic fixture listings keyed by the normalized location.
//! The magic location `"fail"` forces a connector failure so pipelines can
//! exercise the fatal path; unknown locations resolve to an empty dataset.
#![warn(missing_docs)]

use async_trait::async_trait;

use pisos_core::{
    DatasetHandle, ListingRecord, PisosError, RemoteRequest, ScrapeConnector, SearchProvider,
    TransportOptions,
};

mod fixtures;

/// Mock connector backed by static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Stable connector name used to tag errors and diagnostics.
    pub const NAME: &'static str = "pisos-mock";

    /// Construct the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn location_of(req: &RemoteRequest) -> String {
        match req {
            RemoteRequest::Idealista(r) => r.location_query.clone(),
            RemoteRequest::Fotocasa(r) => r.location.clone(),
        }
    }

    fn maybe_fail(location: &str) -> Result<(), PisosError> {
        if location == "fail" {
            Err(PisosError::connector(Self::NAME, "forced failure: search"))
        } else {
            Ok(())
        }
    }
}

impl ScrapeConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn start_search(
        &self,
        req: &RemoteRequest,
        _transport: &TransportOptions,
    ) -> Result<DatasetHandle, PisosError> {
        let location = Self::location_of(req);
        Self::maybe_fail(&location)?;
        Ok(DatasetHandle::new(format!("mock-{location}")))
    }

    async fn fetch_records(
        &self,
        handle: &DatasetHandle,
    ) -> Result<Vec<ListingRecord>, PisosError> {
        let location = handle
            .as_str()
            .strip_prefix("mock-")
            .ok_or_else(|| PisosError::not_found(format!("dataset {handle}")))?;
        Ok(fixtures::by_location(location))
    }
}
