use thiserror::Error;

/// Failures from the resilient fetch layer.
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("JSON deserialization error for {endpoint}: {source}")]
    Deserialize {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint pool is empty")]
    NoEndpoints,

    #[error("all providers exhausted after {attempts} attempts: {source}")]
    AllProvidersExhausted {
        attempts: u32,
        #[source]
        source: Box<OverpassError>,
    },

    #[error("fetch cancelled")]
    Cancelled,
}

impl OverpassError {
    /// `true` when the failure is a per-attempt timeout, which consumes the
    /// attempt without a backoff sleep.
    #[must_use]
    pub fn is_attempt_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// `true` for transport-level connectivity failures (connect errors,
    /// timeouts, requests that never produced a status).
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout() || e.status().is_none(),
            Self::AllProvidersExhausted { source, .. } => source.is_connectivity(),
            Self::UnexpectedStatus { .. }
            | Self::Deserialize { .. }
            | Self::NoEndpoints
            | Self::Cancelled => false,
        }
    }
}

/// Classified failures surfaced by [`crate::Discovery`].
///
/// The presentation layer maps each kind to a retry affordance or static
/// message; the underlying error keeps the full detail chain.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Connectivity-class failure: the provider was never reached, or the
    /// connection died in flight.
    #[error("network error during place discovery: {0}")]
    Network(#[source] OverpassError),

    /// The provider answered, badly: non-success status or a payload that
    /// does not parse.
    #[error("provider error during place discovery: {0}")]
    Provider(#[source] OverpassError),

    #[error("discovery cancelled")]
    Cancelled,
}

impl From<OverpassError> for DiscoveryError {
    fn from(err: OverpassError) -> Self {
        match err {
            OverpassError::Cancelled => Self::Cancelled,
            err if err.is_connectivity() => Self::Network(err),
            err => Self::Provider(err),
        }
    }
}
