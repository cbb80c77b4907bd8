//! Nominatim search response types.
//!
//! Only the fields the resolver consumes are modelled. Notably, Nominatim
//! returns `lat`/`lon` as JSON **strings**, not numbers; candidates whose
//! strings do not parse as finite floats are dropped during mapping rather
//! than failing the whole search.

use serde::Deserialize;

/// One candidate from `GET /search`.
#[derive(Debug, Deserialize)]
pub struct NominatimResult {
    pub place_id: i64,
    pub lat: String,
    pub lon: String,
    /// Full comma-separated display string, always present.
    pub display_name: String,
    /// Structured address sub-fields; present only when the request asked
    /// for `addressdetails=1`.
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

/// Structured address sub-fields. Every field is optional; which ones are
/// present depends on the feature class of the match.
#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub amenity: Option<String>,
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub neighbourhood: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}
