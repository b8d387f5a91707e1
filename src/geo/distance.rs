//! Haversine great-circle distance and open-path scoring.

use super::city::City;

/// Earth radius used for all distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3961.0;

/// Great-circle distance between two cities in miles.
///
/// `h = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `d = R · 2·atan2(√h, √(1−h))`.
pub fn haversine(a: &City, b: &City) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude() - a.longitude()).to_radians();

    // Rounding can push h just past 1 for near-antipodal points.
    let h = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Length of the open path visiting `cities` in `tour` order.
///
/// The last city is not connected back to the first. Tours with fewer
/// than two entries have length 0.
///
/// # Panics
///
/// Panics if `tour` contains an index out of range for `cities`.
pub fn path_length(tour: &[usize], cities: &[City]) -> f64 {
    tour.windows(2)
        .map(|w| haversine(&cities[w[0]], &cities[w[1]]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 1.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 1.0, 0.0),
        ]
    }

    #[test]
    fn test_same_point_is_zero() {
        let a = City::new("x", 48.8566, 2.3522);
        assert_eq!(haversine(&a, &a), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 1.0, 0.0);
        let expected = EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0;
        assert!((haversine(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodes_half_circumference() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 0.0, 180.0);
        let expected = EARTH_RADIUS_MILES * std::f64::consts::PI;
        assert!((haversine(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_sweep_is_finite() {
        let half = EARTH_RADIUS_MILES * std::f64::consts::PI;
        for k in 0..9000 {
            let lat = -89.99 + 0.02 * k as f64;
            for (lon, opposite) in [(10.0, -170.0), (-45.0, 135.0), (0.0, 180.0)] {
                let d = haversine(&City::new("a", lat, lon), &City::new("b", -lat, opposite));
                assert!(d.is_finite(), "NaN distance at lat {lat}, lon {lon}");
                assert!((d - half).abs() < 1e-3, "lat {lat}: {d} != {half}");
            }
        }
    }

    #[test]
    fn test_path_is_open() {
        let cities = square();
        let tour = [0, 1, 2, 3];
        let open = path_length(&tour, &cities);
        let edges = haversine(&cities[0], &cities[1])
            + haversine(&cities[1], &cities[2])
            + haversine(&cities[2], &cities[3]);
        let closing = haversine(&cities[3], &cities[0]);

        assert!((open - edges).abs() < 1e-9);
        assert!((open - (edges + closing)).abs() > 1.0);
    }

    #[test]
    fn test_short_paths_are_zero() {
        let cities = square();
        assert_eq!(path_length(&[], &cities), 0.0);
        assert_eq!(path_length(&[2], &cities), 0.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = City::new("a", lat1, lon1);
            let b = City::new("b", lat2, lon2);
            prop_assert!((haversine(&a, &b) - haversine(&b, &a)).abs() < 1e-9);
        }

        #[test]
        fn prop_bounded_by_half_circumference(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let d = haversine(&City::new("a", lat1, lon1), &City::new("b", lat2, lon2));
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_MILES * std::f64::consts::PI + 1e-6);
        }

        #[test]
        fn prop_antipode_is_half_circumference(lat in -90.0f64..90.0, lon in -180.0f64..0.0) {
            let d = haversine(&City::new("a", lat, lon), &City::new("b", -lat, lon + 180.0));
            prop_assert!((d - EARTH_RADIUS_MILES * std::f64::consts::PI).abs() < 1e-3);
        }
    }
}
