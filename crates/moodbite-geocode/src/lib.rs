//! Location resolution: free-text geocoding and device position.
//!
//! Two ways into a [`moodbite_core::Location`]: [`NominatimClient::search`]
//! turns an address query into labelled candidates, and
//! [`device::current_location`] asks the hosting environment for the
//! current position through the [`DevicePositionSource`] boundary.

pub mod client;
pub mod device;
pub mod error;
pub mod types;

pub use client::NominatimClient;
pub use device::{current_location, DevicePositionSource, PositionOptions};
pub use error::{DeviceLocationError, GeocodeError};
