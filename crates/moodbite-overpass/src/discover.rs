//! Fallback escalation: the full discovery flow for one search.

use moodbite_core::{
    rank_by_distance, Coordinate, SearchOutcome, SearchRequest, TagFilter,
};
use tokio_util::sync::CancellationToken;

use crate::client::OverpassClient;
use crate::error::{DiscoveryError, OverpassError};
use crate::normalize::normalize_elements;
use crate::query::build_query;

/// Orchestrates fetch, normalization, tag escalation, and ranking.
pub struct Discovery {
    client: OverpassClient,
}

impl Discovery {
    #[must_use]
    pub const fn new(client: OverpassClient) -> Self {
        Self { client }
    }

    /// Creates a discovery pipeline from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] if the fetch client cannot be built.
    pub fn from_config(config: &moodbite_core::DiscoveryConfig) -> Result<Self, DiscoveryError> {
        Ok(Self::new(OverpassClient::from_config(config)?))
    }

    /// Runs one full discovery: primary tags first, escalating to the
    /// fallback tags only on an empty-but-successful primary result.
    ///
    /// The returned outcome carries places ranked nearest-first from
    /// `center`. `fallback_tip` becomes the outcome's message only when the
    /// fallback pass was used *and* produced places.
    ///
    /// # Errors
    ///
    /// Fetch failures are never papered over by escalation; they surface
    /// classified as [`DiscoveryError::Network`] or
    /// [`DiscoveryError::Provider`] ([`DiscoveryError::Cancelled`] when the
    /// token fired).
    pub async fn discover(
        &self,
        center: Coordinate,
        radius_meters: u32,
        primary: &TagFilter,
        fallback: &TagFilter,
        fallback_tip: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchOutcome, DiscoveryError> {
        let places = self.run_pass(center, radius_meters, primary, cancel).await?;

        if !places.is_empty() || fallback.is_empty() {
            return Ok(SearchOutcome {
                places: rank_by_distance(places, center),
                used_fallback: false,
                fallback_message: String::new(),
            });
        }

        tracing::debug!("primary tags yielded nothing; escalating to fallback tags");
        let places = self.run_pass(center, radius_meters, fallback, cancel).await?;
        let fallback_message = if places.is_empty() {
            String::new()
        } else {
            fallback_tip.to_owned()
        };

        Ok(SearchOutcome {
            places: rank_by_distance(places, center),
            used_fallback: true,
            fallback_message,
        })
    }

    async fn run_pass(
        &self,
        center: Coordinate,
        radius_meters: u32,
        tags: &TagFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<moodbite_core::Place>, OverpassError> {
        let request = SearchRequest {
            center,
            radius_meters,
            tags: tags.clone(),
        };
        let query = build_query(&request);
        let elements = self.client.fetch(&query, cancel).await?;
        Ok(normalize_elements(elements))
    }
}
