//! Geodesic distance on the WGS-84 ellipsoid.

use geo::{GeodesicDistance, Point};

use super::Coordinates;

/// Metres in one statute mile.
pub const METRES_PER_MILE: f64 = 1609.344;

/// Returns the geodesic distance between two coordinates in statute miles.
///
/// Uses Karney's algorithm on the WGS-84 ellipsoid, so results agree with
/// other geodesic libraries to well under a metre.
///
/// # Examples
///
/// ```
/// use flight_rewards::distance::{Coordinates, geodesic_miles};
///
/// let heathrow = Coordinates::new(51.47, -0.4543);
/// let jfk = Coordinates::new(40.6413, -73.7781);
/// assert_eq!(geodesic_miles(heathrow, jfk).round(), 3452.0);
/// ```
pub fn geodesic_miles(from: Coordinates, to: Coordinates) -> f64 {
    point(from).geodesic_distance(&point(to)) / METRES_PER_MILE
}

fn point(coordinates: Coordinates) -> Point<f64> {
    Point::new(coordinates.longitude, coordinates.latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    fn lhr() -> Coordinates {
        Coordinates::new(51.47, -0.4543)
    }

    #[test]
    fn test_zero_distance_for_same_point() {
        assert_eq!(geodesic_miles(lhr(), lhr()), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let jfk = Coordinates::new(40.6413, -73.7781);
        assert_close(geodesic_miles(lhr(), jfk), geodesic_miles(jfk, lhr()), 1e-6);
    }

    #[test]
    fn test_heathrow_to_jfk_on_the_ellipsoid() {
        let jfk = Coordinates::new(40.6413, -73.7781);
        assert_close(geodesic_miles(lhr(), jfk), 3451.66, 0.01);
    }

    #[test]
    fn test_heathrow_to_hong_kong_stays_below_6000() {
        let hkg = Coordinates::new(22.308, 113.9185);
        assert_close(geodesic_miles(lhr(), hkg), 5994.63, 0.01);
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        // meridian arc is shorter at the equator than the spherical 69.09
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);
        assert_close(geodesic_miles(a, b), 68.71, 0.01);
    }
}
