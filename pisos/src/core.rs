use std::sync::Arc;

use pisos_core::{
    PisosError, RunReport, ScrapeConnector, SearchDefaults, TargetSchema, TransportOptions,
    normalize,
};

use crate::context::RunContext;
use crate::input::{self, RawSearchPayload};
use crate::relay::{self, OutputSink};

/// Orchestrator running the search-relay pipeline against one connector.
pub struct Pisos {
    connector: Arc<dyn ScrapeConnector>,
    target: TargetSchema,
    defaults: SearchDefaults,
    transport: TransportOptions,
}

impl std::fmt::Debug for Pisos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pisos")
            .field("target", &self.target)
            .field("defaults", &self.defaults)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Pisos`] relay with custom configuration.
pub struct PisosBuilder {
    connector: Option<Arc<dyn ScrapeConnector>>,
    target: TargetSchema,
    defaults: SearchDefaults,
    transport: TransportOptions,
}

impl Default for PisosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PisosBuilder {
    /// Create a new builder with the default target schema, defaults, and no
    /// proxy routing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            target: TargetSchema::default(),
            defaults: SearchDefaults::default(),
            transport: TransportOptions::default(),
        }
    }

    /// Register the connector the pipeline invokes.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn ScrapeConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Select the remote provider schema the normalizer targets.
    #[must_use]
    pub fn target_schema(mut self, target: TargetSchema) -> Self {
        self.target = target;
        self
    }

    /// Override the per-field input defaults.
    #[must_use]
    pub fn defaults(mut self, defaults: SearchDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Transport pass-through handed to the connector on every run.
    #[must_use]
    pub fn transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }

    /// Build the relay.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no connector was registered and
    /// `Unsupported` when the connector lacks the search capability.
    pub fn build(self) -> Result<Pisos, PisosError> {
        let connector = self
            .connector
            .ok_or_else(|| PisosError::InvalidArg("a connector is required".to_string()))?;
        if connector.as_search_provider().is_none() {
            return Err(PisosError::unsupported("search"));
        }
        Ok(Pisos {
            connector,
            target: self.target,
            defaults: self.defaults,
            transport: self.transport,
        })
    }
}

impl Pisos {
    /// Returns an unconfigured builder.
    #[must_use]
    pub fn builder() -> PisosBuilder {
        PisosBuilder::new()
    }

    /// Execute one full pipeline run: resolve the payload, normalize it for
    /// the configured provider, invoke the remote scrape, and relay the
    /// fetched records to `sink`.
    ///
    /// # Errors
    /// Only remote-invocation (and sink) failures escape; input defaulting
    /// and normalization are total, and an empty result set is a successful
    /// run with a warning diagnostic.
    pub async fn run(
        &self,
        payload: RawSearchPayload,
        sink: &mut dyn OutputSink,
    ) -> Result<RunReport, PisosError> {
        let _ctx = RunContext::acquire(self.connector.name());

        let spec = input::resolve(payload, &self.defaults);
        tracing::info!(city = %spec.city, max_price = ?spec.max_price, for_rent = spec.for_rent, "input resolved");

        let req = normalize(&spec, self.target);
        tracing::debug!(target = ?self.target, "remote request built");

        let search = self
            .connector
            .as_search_provider()
            .ok_or(PisosError::unsupported("search"))?;
        let handle = search.start_search(&req, &self.transport).await?;
        tracing::info!(%handle, "result collection handle obtained");

        let records = search.fetch_records(&handle).await?;
        tracing::info!(count = records.len(), "result collection fetched");

        relay::relay(&spec, records, sink).await
    }

    /// Convenience wrapper: read the payload from an optional JSON document
    /// (the host's input shape) and run the pipeline.
    ///
    /// # Errors
    /// Same as [`Pisos::run`].
    pub async fn run_json(
        &self,
        raw: Option<&str>,
        sink: &mut dyn OutputSink,
    ) -> Result<RunReport, PisosError> {
        self.run(RawSearchPayload::from_json(raw), sink).await
    }
}
