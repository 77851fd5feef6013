//! Platform API abstraction and the production adapter backed by `reqwest`.

#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use pisos_core::{ListingRecord, PisosError};

const CONNECTOR: &str = "pisos-apify";

/// Lifecycle status of an actor run as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RunStatus {
    /// Queued, not yet started.
    #[serde(rename = "READY")]
    Ready,
    /// Actively scraping.
    #[serde(rename = "RUNNING")]
    Running,
    /// Finished successfully; the default dataset is complete.
    #[serde(rename = "SUCCEEDED")]
    Succeeded,
    /// Finished with an error.
    #[serde(rename = "FAILED")]
    Failed,
    /// Abort requested, still winding down.
    #[serde(rename = "ABORTING")]
    Aborting,
    /// Aborted before completion.
    #[serde(rename = "ABORTED")]
    Aborted,
    /// Platform-side timeout in progress.
    #[serde(rename = "TIMING-OUT")]
    TimingOut,
    /// Killed by the platform-side timeout.
    #[serde(rename = "TIMED-OUT")]
    TimedOut,
    /// A status this client does not know; treated as still in flight.
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Whether the run has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Aborted | Self::TimedOut)
    }

    /// Platform spelling, used in diagnostics and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Aborting => "ABORTING",
            Self::Aborted => "ABORTED",
            Self::TimingOut => "TIMING-OUT",
            Self::TimedOut => "TIMED-OUT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Snapshot of one actor run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInfo {
    /// Platform-issued run id.
    pub id: String,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// Dataset the run writes its output to; present once the run exists.
    pub default_dataset_id: Option<String>,
}

/// Platform API abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait ApifyApi: Send + Sync {
    /// Start a run of the named actor with the given input payload.
    async fn start_run(
        &self,
        actor_id: &str,
        input: &serde_json::Value,
    ) -> Result<RunInfo, PisosError>;

    /// Fetch the current snapshot of a run.
    async fn run_info(&self, run_id: &str) -> Result<RunInfo, PisosError>;

    /// Fetch the full ordered item list of a dataset.
    async fn dataset_items(&self, dataset_id: &str) -> Result<Vec<ListingRecord>, PisosError>;
}

// Platform responses wrap the payload in a `data` envelope; dataset items
// come back as a bare array.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Production adapter over the platform's v2 REST API.
///
/// `reqwest::Client` is internally reference-counted, so the adapter is
/// cheaply cloneable.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl RealAdapter {
    /// Default public API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.apify.com/";

    /// Build an adapter against the public API with the given token.
    ///
    /// # Panics
    /// Panics if the compiled-in default base URL fails to parse, which
    /// cannot happen outside of a build defect.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let base = Url::parse(Self::DEFAULT_BASE_URL).expect("default base url is valid");
        Self::with_base_url(token, base)
    }

    /// Build an adapter against a custom endpoint (tests, private clusters).
    #[must_use]
    pub fn with_base_url(token: impl Into<String>, base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, PisosError> {
        self.base
            .join(path)
            .map_err(|e| PisosError::InvalidArg(format!("bad endpoint {path}: {e}")))
    }
}

fn map_transport_err(e: &reqwest::Error, context: &str) -> PisosError {
    PisosError::connector(CONNECTOR, format!("{context}: {e}"))
}

fn check_status(resp: reqwest::Response, context: &str) -> Result<reqwest::Response, PisosError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else if status == reqwest::StatusCode::NOT_FOUND {
        Err(PisosError::not_found(context.to_string()))
    } else {
        Err(PisosError::connector(
            CONNECTOR,
            format!("status {status}: {context}"),
        ))
    }
}

#[async_trait]
impl ApifyApi for RealAdapter {
    async fn start_run(
        &self,
        actor_id: &str,
        input: &serde_json::Value,
    ) -> Result<RunInfo, PisosError> {
        let url = self.endpoint(&format!("v2/acts/{actor_id}/runs"))?;
        let resp = self
            .http
            .post(url)
            .query(&[("token", self.token.as_str())])
            .json(input)
            .send()
            .await
            .map_err(|e| map_transport_err(&e, &format!("start run for {actor_id}")))?;
        let resp = check_status(resp, &format!("start run for {actor_id}"))?;
        let env: DataEnvelope<RunInfo> = resp
            .json()
            .await
            .map_err(|e| PisosError::Data(format!("malformed run response: {e}")))?;
        Ok(env.data)
    }

    async fn run_info(&self, run_id: &str) -> Result<RunInfo, PisosError> {
        let url = self.endpoint(&format!("v2/actor-runs/{run_id}"))?;
        let resp = self
            .http
            .get(url)
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| map_transport_err(&e, &format!("run {run_id}")))?;
        let resp = check_status(resp, &format!("run {run_id}"))?;
        let env: DataEnvelope<RunInfo> = resp
            .json()
            .await
            .map_err(|e| PisosError::Data(format!("malformed run response: {e}")))?;
        Ok(env.data)
    }

    async fn dataset_items(&self, dataset_id: &str) -> Result<Vec<ListingRecord>, PisosError> {
        let url = self.endpoint(&format!("v2/datasets/{dataset_id}/items"))?;
        let resp = self
            .http
            .get(url)
            .query(&[("token", self.token.as_str()), ("format", "json")])
            .send()
            .await
            .map_err(|e| map_transport_err(&e, &format!("dataset {dataset_id}")))?;
        let resp = check_status(resp, &format!("dataset {dataset_id}"))?;
        resp.json()
            .await
            .map_err(|e| PisosError::Data(format!("malformed dataset items: {e}")))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn ApifyApi {
    /// Build an `ApifyApi` from three closures (tests only).
    pub fn from_fns<FStart, FInfo, FItems>(
        fstart: FStart,
        finfo: FInfo,
        fitems: FItems,
    ) -> Arc<dyn ApifyApi>
    where
        FStart: Send + Sync + 'static + Fn(String, serde_json::Value) -> Result<RunInfo, PisosError>,
        FInfo: Send + Sync + 'static + Fn(String) -> Result<RunInfo, PisosError>,
        FItems: Send + Sync + 'static + Fn(String) -> Result<Vec<ListingRecord>, PisosError>,
    {
        struct FnApi<FStart, FInfo, FItems> {
            fstart: FStart,
            finfo: FInfo,
            fitems: FItems,
        }

        #[async_trait]
        impl<FStart, FInfo, FItems> ApifyApi for FnApi<FStart, FInfo, FItems>
        where
            FStart:
                Send + Sync + 'static + Fn(String, serde_json::Value) -> Result<RunInfo, PisosError>,
            FInfo: Send + Sync + 'static + Fn(String) -> Result<RunInfo, PisosError>,
            FItems: Send + Sync + 'static + Fn(String) -> Result<Vec<ListingRecord>, PisosError>,
        {
            async fn start_run(
                &self,
                actor_id: &str,
                input: &serde_json::Value,
            ) -> Result<RunInfo, PisosError> {
                (self.fstart)(actor_id.to_string(), input.clone())
            }

            async fn run_info(&self, run_id: &str) -> Result<RunInfo, PisosError> {
                (self.finfo)(run_id.to_string())
            }

            async fn dataset_items(
                &self,
                dataset_id: &str,
            ) -> Result<Vec<ListingRecord>, PisosError> {
                (self.fitems)(dataset_id.to_string())
            }
        }

        Arc::new(FnApi {
            fstart,
            finfo,
            fitems,
        })
    }
}
