use thiserror::Error;

/// Unified error type for the pisos workspace.
///
/// This wraps capability mismatches, argument validation errors,
/// connector-tagged transport failures, and failed remote runs. Input
/// defaulting and request normalization are total and never produce one of
/// these; only the remote-invocation path does.
#[derive(Debug, Error)]
pub enum PisosError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "search").
        capability: &'static str,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned a transport or service error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The remote run reached a failed terminal state.
    #[error("{connector} run failed with status {status}")]
    RunFailed {
        /// Connector name that owns the failed run.
        connector: String,
        /// Terminal status reported by the remote platform.
        status: String,
    },

    /// A remote resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "dataset abc123".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PisosError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `RunFailed` error for a terminal run status.
    pub fn run_failed(connector: impl Into<String>, status: impl Into<String>) -> Self {
        Self::RunFailed {
            connector: connector.into(),
            status: status.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if the error is fatal to the run.
    ///
    /// Everything in this enum is fatal today; the classification exists so
    /// callers do not have to enumerate variants when the taxonomy grows.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        true
    }
}
