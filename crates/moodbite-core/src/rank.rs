//! Proximity ranking for normalized places.

use crate::distance::haversine_meters;
use crate::place::{Coordinate, Place};

/// Attaches the great-circle distance from `origin` to every place and
/// sorts nearest first.
///
/// The sort is stable, so places at identical distances keep their input
/// order. Empty input yields empty output. Ranking an already-ranked list
/// recomputes the same distances and leaves the order unchanged.
#[must_use]
pub fn rank_by_distance(mut places: Vec<Place>, origin: Coordinate) -> Vec<Place> {
    for place in &mut places {
        place.distance_meters = Some(haversine_meters(origin, place.coordinate()));
    }
    places.sort_by(|a, b| {
        let da = a.distance_meters.unwrap_or(f64::INFINITY);
        let db = b.distance_meters.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    places
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i64, lat: f64, lng: f64) -> Place {
        Place {
            id,
            name: format!("place-{id}"),
            lat,
            lng,
            category: "cafe".to_owned(),
            cuisine: None,
            opening_hours: None,
            phone: None,
            website: None,
            takeaway: false,
            outdoor_seating: false,
            distance_meters: None,
        }
    }

    const ORIGIN: Coordinate = Coordinate::new(40.0, -73.0);

    #[test]
    fn sorts_nearest_first() {
        let ranked = rank_by_distance(
            vec![
                place(1, 40.2, -73.0),
                place(2, 40.01, -73.0),
                place(3, 40.1, -73.0),
            ],
            ORIGIN,
        );
        let ids: Vec<_> = ranked.iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn attaches_finite_distances() {
        let ranked = rank_by_distance(vec![place(1, 40.01, -73.0)], ORIGIN);
        let d = ranked[0].distance_meters.unwrap();
        assert!(d.is_finite() && d > 0.0);
    }

    #[test]
    fn is_idempotent() {
        let once = rank_by_distance(
            vec![place(1, 40.2, -73.0), place(2, 40.01, -73.0)],
            ORIGIN,
        );
        let twice = rank_by_distance(once.clone(), ORIGIN);
        assert_eq!(once, twice);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_by_distance(
            vec![place(7, 40.05, -73.0), place(8, 40.05, -73.0)],
            ORIGIN,
        );
        let ids: Vec<_> = ranked.iter().map(|p| p.id).collect();
        assert_eq!(ids, [7, 8]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank_by_distance(Vec::new(), ORIGIN).is_empty());
    }
}
