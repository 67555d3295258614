//! Great-circle distance on a spherical Earth.
//!
//! Straight-line (haversine) distance only; no routing or travel time.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two lat/lon points (degrees).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to two decimal places.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

pub fn valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

pub fn valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// Both components finite and within range. NaN fails the range checks.
pub fn valid_coordinates(lat: f64, lon: f64) -> bool {
    valid_latitude(lat) && valid_longitude(lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_km(40.753182, -73.982253, 40.753182, -73.982253), 0.0);
    }

    #[test]
    fn test_london_paris() {
        let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert_abs_diff_eq!(d, 343.556, epsilon = 0.01);
    }

    #[test]
    fn test_manhattan_to_brooklyn() {
        let d = haversine_km(40.753182, -73.982253, 40.693943, -73.985880);
        assert_abs_diff_eq!(round_km(d), 6.59, epsilon = 1e-9);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert_abs_diff_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(7.1649), 7.16);
        assert_eq!(round_km(7.165001), 7.17);
        assert_eq!(round_km(0.0), 0.0);
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(valid_coordinates(90.0, 180.0));
        assert!(valid_coordinates(-90.0, -180.0));
        assert!(!valid_coordinates(90.5, 0.0));
        assert!(!valid_coordinates(0.0, -180.01));
        assert!(!valid_coordinates(f64::NAN, 0.0));
        assert!(!valid_coordinates(0.0, f64::INFINITY));
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let ba = haversine_km(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_self_distance_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert_eq!(haversine_km(lat, lon, lat, lon), 0.0);
        }

        #[test]
        fn prop_bounded(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
