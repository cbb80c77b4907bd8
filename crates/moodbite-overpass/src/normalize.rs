//! Normalization from raw Overpass elements to canonical [`Place`] records.

use moodbite_core::Place;

use crate::types::RawElement;

/// Normalizes raw elements, dropping every record without a usable name or
/// without both coordinates. Total: well-formed provider JSON never errors,
/// unknown tags are ignored, missing optional tags map to absent/false.
#[must_use]
pub fn normalize_elements(elements: Vec<RawElement>) -> Vec<Place> {
    elements.into_iter().filter_map(normalize_element).collect()
}

fn normalize_element(element: RawElement) -> Option<Place> {
    let lat = element.lat?;
    let lng = element.lon?;

    let mut tags = element.tags;
    let name = tags.remove("name").filter(|n| !n.trim().is_empty())?;

    Some(Place {
        id: element.id,
        name,
        lat,
        lng,
        category: tags
            .remove("amenity")
            .unwrap_or_else(|| "place".to_owned()),
        cuisine: tags.remove("cuisine"),
        opening_hours: tags.remove("opening_hours"),
        phone: tags.remove("phone"),
        website: tags.remove("website"),
        takeaway: tags.get("takeaway").is_some_and(|v| v == "yes"),
        outdoor_seating: tags.get("outdoor_seating").is_some_and(|v| v == "yes"),
        distance_meters: None,
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
