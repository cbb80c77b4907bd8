//! Canonical domain types for the place discovery pipeline.
//!
//! A search starts from a [`Coordinate`] (or a resolved [`Location`]), is
//! scoped by a [`SearchRequest`], and terminates in a [`SearchOutcome`]
//! holding ranked [`Place`] records. Raw provider shapes never escape the
//! provider crates; everything user-facing speaks these types.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A WGS84 point. Plain value type, copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A coordinate plus an optional human-readable label.
///
/// Produced by the location resolver: device positions carry no label,
/// geocoded candidates carry a short display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinate: Coordinate,
    pub display_name: Option<String>,
}

/// One `key=value` amenity tag, e.g. `amenity=cafe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    pub key: String,
    pub value: String,
}

impl TagPair {
    /// Parses a `"key=value"` spec.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTagSpec`] when the `=` is missing or
    /// either side is empty.
    pub fn parse(spec: &str) -> Result<Self, CoreError> {
        let (key, value) = spec
            .split_once('=')
            .ok_or_else(|| CoreError::InvalidTagSpec(spec.to_owned()))?;
        if key.is_empty() || value.is_empty() {
            return Err(CoreError::InvalidTagSpec(spec.to_owned()));
        }
        Ok(Self {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// An ordered, duplicate-free set of tag pairs.
///
/// Insertion order is irrelevant to query semantics but is preserved so
/// compiled query strings are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    pairs: Vec<TagPair>,
}

impl TagFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Builds a filter from `(key, value)` pairs, skipping duplicates.
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::new();
        for (key, value) in pairs {
            filter.push(key, value);
        }
        filter
    }

    /// Parses `"key=value"` specs into a filter, skipping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTagSpec`] on the first malformed spec.
    pub fn parse<'a, I>(specs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filter = Self::new();
        for spec in specs {
            let pair = TagPair::parse(spec)?;
            if !filter.pairs.contains(&pair) {
                filter.pairs.push(pair);
            }
        }
        Ok(filter)
    }

    /// Appends a pair unless an identical one is already present.
    pub fn push(&mut self, key: &str, value: &str) {
        let pair = TagPair {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        if !self.pairs.contains(&pair) {
            self.pairs.push(pair);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagPair> {
        self.pairs.iter()
    }
}

/// One discovery request. Constructed fresh per search, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub center: Coordinate,
    pub radius_meters: u32,
    pub tags: TagFilter,
}

/// A normalized point of interest.
///
/// `distance_meters` is `None` until the record passes through ranking;
/// every place in a [`SearchOutcome`] carries `Some(finite)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    /// Non-empty by construction: nameless records are dropped during
    /// normalization.
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Amenity category, `"place"` when the provider gave none.
    #[serde(rename = "type")]
    pub category: String,
    pub cuisine: Option<String>,
    pub opening_hours: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub takeaway: bool,
    pub outdoor_seating: bool,
    pub distance_meters: Option<f64>,
}

impl Place {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Terminal artifact of one discovery request.
///
/// `fallback_message` is non-empty only when the fallback tag set was used
/// *and* produced results — there is no tip worth showing over an empty
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Nearest first.
    pub places: Vec<Place>,
    pub used_fallback: bool,
    pub fallback_message: String,
}

impl SearchOutcome {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            places: Vec::new(),
            used_fallback: false,
            fallback_message: String::new(),
        }
    }
}
