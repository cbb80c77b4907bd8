//! HTTP client for a Nominatim-style geocoding service.
//!
//! Wraps `reqwest` with query validation, typed errors, and mapping from
//! raw candidates to [`Location`] values with short display names.

use std::time::Duration;

use moodbite_core::{Coordinate, DiscoveryConfig, Location};
use reqwest::Client;

use crate::error::GeocodeError;
use crate::types::NominatimResult;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Maximum number of candidates requested per search.
const RESULT_LIMIT: u32 = 5;

/// Minimum trimmed query length; shorter queries fail without any I/O.
const MIN_QUERY_CHARS: usize = 3;

/// Client for the Nominatim `search` endpoint.
///
/// Nominatim requires an identifying `User-Agent`; the client sets it on
/// every request. Use [`NominatimClient::with_base_url`] to point at a mock
/// server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim service.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Creates a client from loaded discovery configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &DiscoveryConfig) -> Result<Self, GeocodeError> {
        Self::with_base_url(
            &config.user_agent,
            config.geocode_timeout_secs,
            &config.geocode_base_url,
        )
    }

    /// Geocodes a free-text address query into up to five candidates.
    ///
    /// A provider that finds nothing yields `Ok(vec![])`, not an error.
    /// Candidates whose coordinates do not parse as finite floats are
    /// dropped.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::InvalidQuery`] — trimmed query shorter than 3
    ///   characters; no request is made.
    /// - [`GeocodeError::UnexpectedStatus`] — non-2xx response.
    /// - [`GeocodeError::Http`] — network or TLS failure.
    /// - [`GeocodeError::Deserialize`] — response body is not valid JSON.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>, GeocodeError> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Err(GeocodeError::InvalidQuery {
                query: query.to_owned(),
            });
        }

        let url = format!("{}/search", self.base_url);
        let limit = RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", trimmed),
                ("format", "json"),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let candidates: Vec<NominatimResult> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search results for \"{trimmed}\""),
                source: e,
            })?;

        tracing::debug!(query = trimmed, candidates = candidates.len(), "geocoded address");

        Ok(candidates
            .into_iter()
            .filter_map(|candidate| {
                let lat = candidate.lat.parse::<f64>().ok().filter(|v| v.is_finite())?;
                let lng = candidate.lon.parse::<f64>().ok().filter(|v| v.is_finite())?;
                let display_name = build_short_name(&candidate);
                Some(Location {
                    coordinate: Coordinate::new(lat, lng),
                    display_name: Some(display_name),
                })
            })
            .collect())
    }
}

/// Builds a short, readable label for a candidate.
///
/// Precedence: amenity, else road, else neighbourhood, else suburb; then
/// city/town/village appended when present. Without any structured part,
/// falls back to the first two comma-separated segments of the full
/// display string.
fn build_short_name(result: &NominatimResult) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(addr) = &result.address {
        if let Some(primary) = addr
            .amenity
            .as_deref()
            .or(addr.road.as_deref())
            .or(addr.neighbourhood.as_deref())
            .or(addr.suburb.as_deref())
        {
            parts.push(primary);
        }
        if let Some(settlement) = addr
            .city
            .as_deref()
            .or(addr.town.as_deref())
            .or(addr.village.as_deref())
        {
            parts.push(settlement);
        }
    }

    if parts.is_empty() {
        return result
            .display_name
            .split(',')
            .take(2)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", ");
    }

    parts.join(", ")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
