//! Device position boundary.
//!
//! The hosting environment (browser shell, mobile runtime, test fake)
//! implements [`DevicePositionSource`]; [`current_location`] adds the
//! resolver-side timeout and maps a successful fix into an unlabelled
//! [`Location`].

use std::time::Duration;

use async_trait::async_trait;
use moodbite_core::{Coordinate, DiscoveryConfig, Location};

use crate::error::DeviceLocationError;

/// Accuracy/timeout/cache-age configuration passed to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    /// How long to wait for a fix before giving up.
    pub timeout: Duration,
    /// A cached fix no older than this is acceptable.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(300),
        }
    }
}

impl PositionOptions {
    #[must_use]
    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(config.device_timeout_secs),
            maximum_age: Duration::from_secs(config.device_max_age_secs),
        }
    }
}

/// The hosting environment's geolocation capability.
///
/// An environment without the capability returns
/// [`DeviceLocationError::Unsupported`].
#[async_trait]
pub trait DevicePositionSource: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, DeviceLocationError>;
}

/// Resolves the device's current position into a [`Location`].
///
/// Suspends until the source responds or `options.timeout` elapses. A
/// device fix carries no display name.
///
/// # Errors
///
/// - [`DeviceLocationError::Timeout`] — the source did not answer in time.
/// - Any error the source itself reports (permission denied, position
///   unavailable, unsupported).
pub async fn current_location<S>(
    source: &S,
    options: &PositionOptions,
) -> Result<Location, DeviceLocationError>
where
    S: DevicePositionSource + ?Sized,
{
    let coordinate = tokio::time::timeout(options.timeout, source.current_position(options))
        .await
        .map_err(|_| DeviceLocationError::Timeout)??;

    Ok(Location {
        coordinate,
        display_name: None,
    })
}
