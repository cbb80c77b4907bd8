//! Raw Overpass response types.
//!
//! Only node elements with `out body` output are expected, but the shapes
//! are defensive: `elements` may be absent entirely, ways and relations
//! carry no `lat`/`lon`, and tag maps may be missing. Records the
//! normalizer cannot use are dropped there, never errored on here.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level Overpass JSON envelope.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// One raw point-of-interest record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}
