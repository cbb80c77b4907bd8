//! Great-circle distance on a spherical Earth.

use crate::place::Coordinate;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Symmetric, and zero for identical inputs.
#[must_use]
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES_SQUARE: Coordinate = Coordinate::new(40.758, -73.9855);
    const GRAND_CENTRAL: Coordinate = Coordinate::new(40.7527, -73.9772);

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_meters(TIMES_SQUARE, TIMES_SQUARE), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_meters(TIMES_SQUARE, GRAND_CENTRAL);
        let ba = haversine_meters(GRAND_CENTRAL, TIMES_SQUARE);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        // R * pi / 180 ~= 111 194.9 m
        let d = haversine_meters(a, b);
        assert!((d - 111_194.93).abs() < 1.0, "got {d}");
    }

    #[test]
    fn times_square_to_grand_central_is_under_a_kilometer() {
        let d = haversine_meters(TIMES_SQUARE, GRAND_CENTRAL);
        assert!((800.0..1_100.0).contains(&d), "got {d}");
    }
}
