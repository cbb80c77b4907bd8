use std::collections::HashMap;

use super::*;

fn element(id: i64, tags: &[(&str, &str)]) -> RawElement {
    RawElement {
        id,
        lat: Some(40.0),
        lon: Some(-73.0),
        tags: tags
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    }
}

#[test]
fn named_cafe_normalizes_with_defaults() {
    let places = normalize_elements(vec![element(
        1,
        &[("amenity", "cafe"), ("name", "Joe's")],
    )]);

    assert_eq!(places.len(), 1);
    let place = &places[0];
    assert_eq!(place.id, 1);
    assert_eq!(place.name, "Joe's");
    assert_eq!(place.category, "cafe");
    assert!((place.lat - 40.0).abs() < 1e-9);
    assert!((place.lng - (-73.0)).abs() < 1e-9);
    assert!(place.cuisine.is_none());
    assert!(place.opening_hours.is_none());
    assert!(place.phone.is_none());
    assert!(place.website.is_none());
    assert!(!place.takeaway);
    assert!(!place.outdoor_seating);
    assert!(place.distance_meters.is_none());
}

#[test]
fn all_known_tags_are_mapped() {
    let places = normalize_elements(vec![element(
        2,
        &[
            ("name", "Bun House"),
            ("amenity", "fast_food"),
            ("cuisine", "burger"),
            ("opening_hours", "Mo-Su 10:00-22:00"),
            ("phone", "+1-212-555-0101"),
            ("website", "https://bunhouse.example"),
            ("takeaway", "yes"),
            ("outdoor_seating", "yes"),
        ],
    )]);

    let place = &places[0];
    assert_eq!(place.category, "fast_food");
    assert_eq!(place.cuisine.as_deref(), Some("burger"));
    assert_eq!(place.opening_hours.as_deref(), Some("Mo-Su 10:00-22:00"));
    assert_eq!(place.phone.as_deref(), Some("+1-212-555-0101"));
    assert_eq!(place.website.as_deref(), Some("https://bunhouse.example"));
    assert!(place.takeaway);
    assert!(place.outdoor_seating);
}

#[test]
fn nameless_records_are_dropped() {
    let places = normalize_elements(vec![
        element(1, &[("amenity", "cafe")]),
        element(2, &[("amenity", "cafe"), ("name", "  ")]),
        element(3, &[("amenity", "cafe"), ("name", "Kept")]),
    ]);
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "Kept");
}

#[test]
fn records_without_coordinates_are_dropped() {
    let no_lat = RawElement {
        id: 4,
        lat: None,
        lon: Some(-73.0),
        tags: HashMap::from([("name".to_owned(), "Ghost".to_owned())]),
    };
    assert!(normalize_elements(vec![no_lat]).is_empty());
}

#[test]
fn missing_amenity_defaults_to_place() {
    let places = normalize_elements(vec![element(5, &[("name", "Unlabelled")])]);
    assert_eq!(places[0].category, "place");
}

#[test]
fn non_yes_flags_stay_false() {
    let places = normalize_elements(vec![element(
        6,
        &[("name", "Sit-down"), ("takeaway", "no"), ("outdoor_seating", "maybe")],
    )]);
    assert!(!places[0].takeaway);
    assert!(!places[0].outdoor_seating);
}

#[test]
fn empty_input_is_empty_output() {
    assert!(normalize_elements(Vec::new()).is_empty());
}
