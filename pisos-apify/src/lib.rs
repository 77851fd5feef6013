//! pisos-apify
//!
//! Production connector that implements the `pisos-core` contracts on top of
//! the Apify actor platform. A search is one actor run: start it, poll the
//! run until it reaches a terminal state, then resolve its default dataset
//! into the relayed records.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use adapter::{ApifyApi, RealAdapter, RunInfo, RunStatus};
use pisos_core::{
    DatasetHandle, ListingRecord, PisosError, RemoteRequest, ScrapeConnector, SearchProvider,
    TransportOptions,
};

pub use builder::ApifyConnectorBuilder;

/// Public connector type. Production users construct it via
/// [`ApifyConnector::builder`].
pub struct ApifyConnector {
    api: Arc<dyn ApifyApi>,
    actor_id: String,
    poll_interval: Duration,
}

impl std::fmt::Debug for ApifyConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApifyConnector")
            .field("actor_id", &self.actor_id)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl ApifyConnector {
    /// Stable connector name used to tag errors and diagnostics.
    pub const NAME: &'static str = "pisos-apify";

    /// Returns an unconfigured builder.
    #[must_use]
    pub fn builder() -> ApifyConnectorBuilder {
        ApifyConnectorBuilder::new()
    }

    pub(crate) fn from_parts(
        api: Arc<dyn ApifyApi>,
        actor_id: String,
        poll_interval: Duration,
    ) -> Self {
        Self {
            api,
            actor_id,
            poll_interval,
        }
    }

    /// Build directly from a token and actor id against the public API.
    #[must_use]
    pub fn new(token: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self::from_parts(
            Arc::new(RealAdapter::new(token)),
            actor_id.into(),
            Duration::from_secs(1),
        )
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_api(api: Arc<dyn ApifyApi>, actor_id: impl Into<String>) -> Self {
        Self::from_parts(api, actor_id.into(), Duration::from_millis(1))
    }

    fn normalize_error(e: PisosError, what: &str) -> PisosError {
        match e {
            PisosError::Other(msg) => PisosError::connector(Self::NAME, format!("{what}: {msg}")),
            other => other,
        }
    }

    // Merge the transport pass-through into the actor input. The platform
    // expects its own spelling here, so the mapping lives in this crate.
    fn actor_input(
        req: &RemoteRequest,
        transport: &TransportOptions,
    ) -> Result<serde_json::Value, PisosError> {
        let mut input = req.to_value()?;
        if let (Some(proxy), Some(obj)) = (&transport.proxy, input.as_object_mut()) {
            let mut cfg = serde_json::Map::new();
            cfg.insert("useApifyProxy".into(), serde_json::Value::Bool(true));
            if !proxy.groups.is_empty() {
                cfg.insert(
                    "apifyProxyGroups".into(),
                    serde_json::Value::from(proxy.groups.clone()),
                );
            }
            if let Some(country) = &proxy.country {
                cfg.insert(
                    "apifyProxyCountry".into(),
                    serde_json::Value::from(country.clone()),
                );
            }
            obj.insert("proxyConfiguration".into(), serde_json::Value::Object(cfg));
        }
        Ok(input)
    }

    async fn wait_for_terminal(&self, mut info: RunInfo) -> Result<RunInfo, PisosError> {
        while !info.status.is_terminal() {
            tracing::debug!(run_id = %info.id, status = info.status.as_str(), "run in flight");
            tokio::time::sleep(self.poll_interval).await;
            info = self
                .api
                .run_info(&info.id)
                .await
                .map_err(|e| Self::normalize_error(e, "poll run"))?;
        }
        Ok(info)
    }
}

impl ScrapeConnector for ApifyConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Apify"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }
}

#[async_trait]
impl SearchProvider for ApifyConnector {
    async fn start_search(
        &self,
        req: &RemoteRequest,
        transport: &TransportOptions,
    ) -> Result<DatasetHandle, PisosError> {
        let input = Self::actor_input(req, transport)?;
        let run = self
            .api
            .start_run(&self.actor_id, &input)
            .await
            .map_err(|e| Self::normalize_error(e, "start run"))?;
        tracing::info!(actor = %self.actor_id, run_id = %run.id, "actor run started");

        let finished = self.wait_for_terminal(run).await?;
        if finished.status != RunStatus::Succeeded {
            return Err(PisosError::run_failed(Self::NAME, finished.status.as_str()));
        }

        let dataset_id = finished.default_dataset_id.ok_or_else(|| {
            PisosError::Data("run succeeded without a default dataset id".to_string())
        })?;
        Ok(DatasetHandle::new(dataset_id))
    }

    async fn fetch_records(
        &self,
        handle: &DatasetHandle,
    ) -> Result<Vec<ListingRecord>, PisosError> {
        self.api
            .dataset_items(handle.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, "fetch dataset"))
    }
}
