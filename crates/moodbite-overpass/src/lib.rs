//! The place discovery pipeline against Overpass-style geodata providers.
//!
//! One search flows query-building → resilient fetching across an endpoint
//! pool → normalization into canonical places → fallback escalation →
//! proximity ranking. [`Discovery::discover`] drives the whole chain and
//! returns the terminal [`moodbite_core::SearchOutcome`].

pub mod client;
pub mod discover;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::{OverpassClient, RetryPolicy};
pub use discover::Discovery;
pub use error::{DiscoveryError, OverpassError};
pub use normalize::normalize_elements;
pub use query::build_query;
pub use types::{OverpassResponse, RawElement};
