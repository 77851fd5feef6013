use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::ApifyConnector;
use crate::adapter::RealAdapter;
use pisos_core::PisosError;

/// Builder for [`ApifyConnector`].
///
/// Token and actor id are mandatory; base URL and poll cadence default to
/// the public platform endpoint and one second.
#[derive(Debug, Default)]
pub struct ApifyConnectorBuilder {
    token: Option<String>,
    actor_id: Option<String>,
    base_url: Option<Url>,
    poll_interval: Duration,
}

impl ApifyConnectorBuilder {
    /// Create a builder with default cadence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            actor_id: None,
            base_url: None,
            poll_interval: Duration::from_secs(1),
        }
    }

    /// Platform API token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Actor to run, e.g. `"user~idealista-scraper"`.
    #[must_use]
    pub fn actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    /// Override the API endpoint (tests, private clusters).
    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// How often to poll an in-flight run.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the token or actor id is missing.
    pub fn build(self) -> Result<ApifyConnector, PisosError> {
        let token = self
            .token
            .ok_or_else(|| PisosError::InvalidArg("apify token is required".to_string()))?;
        let actor_id = self
            .actor_id
            .ok_or_else(|| PisosError::InvalidArg("apify actor id is required".to_string()))?;
        let adapter = match self.base_url {
            Some(base) => RealAdapter::with_base_url(token, base),
            None => RealAdapter::new(token),
        };
        Ok(ApifyConnector::from_parts(
            Arc::new(adapter),
            actor_id,
            self.poll_interval,
        ))
    }
}
