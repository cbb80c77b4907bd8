use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("query \"{query}\" is too short: need at least 3 characters")]
    InvalidQuery { query: String },

    #[error("HTTP error from geocoder: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from geocoder at {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures reported by the hosting environment's geolocation capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceLocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("position request timed out")]
    Timeout,

    #[error("geolocation is not supported by this environment")]
    Unsupported,
}

impl DeviceLocationError {
    /// Maps the environment's numeric error codes (1 = permission denied,
    /// 2 = position unavailable, 3 = timeout). Unknown codes are treated
    /// as an unavailable position.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::PositionUnavailable,
        }
    }
}
