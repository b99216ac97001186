//! Great-circle geometry.

use crate::types::Coordinate;

/// Mean Earth radius used for haversine distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula).
#[must_use]
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        for p in [point(48.8672, 2.7823), point(-33.9, 151.2), point(90.0, 0.0)] {
            assert!(haversine_meters(p, p).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = point(48.8672, 2.7823);
        let b = point(48.2661, 7.7220);
        assert!((haversine_meters(a, b) - haversine_meters(b, a)).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_meters(point(0.0, 0.0), point(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn nearby_disneyland_entries_are_tens_of_meters_apart() {
        let d = haversine_meters(point(48.8672, 2.7823), point(48.8675, 2.7820));
        assert!(d > 30.0 && d < 50.0, "got {d}");
    }
}
