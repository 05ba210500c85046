#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometric primitives shared across the photo map workspace.
//!
//! Everything here operates on bare `(latitude, longitude)` pairs in
//! degrees. [`haversine_distance_meters`] is the only distance metric used
//! anywhere in the workspace, and the validation predicates encode the
//! coordinate rules photo metadata must satisfy before it enters the
//! clustering pipeline.

/// Earth radius in meters assumed by [`haversine_distance_meters`].
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates, by the
/// haversine formula on a sphere of [`EARTH_RADIUS_METERS`].
///
/// Symmetric up to floating-point rounding, and exactly `0.0` when both
/// points are identical.
#[must_use]
#[allow(clippy::suboptimal_flops)] // keep the textbook form of the formula
pub fn haversine_distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Whether two coordinates lie within `tolerance_meters` of each other
/// along the great circle.
#[must_use]
pub fn within_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, tolerance_meters: f64) -> bool {
    haversine_distance_meters(lat1, lon1, lat2, lon2) <= tolerance_meters
}

/// Range-only sanity check: latitude in `[-90, 90]`, longitude in
/// `[-180, 180]`. Used at outer boundaries (CLI arguments, geocoding
/// requests) where a zero coordinate is still a legitimate query point.
#[must_use]
pub fn in_valid_range(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// Full validation applied to coordinates extracted from photo metadata:
/// neither component NaN, neither component exactly `0` (the upstream
/// "no GPS" sentinel, which makes true equatorial and prime-meridian
/// points unrepresentable), and both inside the valid range.
#[must_use]
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    !latitude.is_nan()
        && !longitude.is_nan()
        && latitude != 0.0
        && longitude != 0.0
        && in_valid_range(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_have_zero_distance() {
        let d = haversine_distance_meters(40.7128, -74.0060, 40.7128, -74.0060);
        assert!(d.abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_distance_meters(40.7128, -74.0060, 51.5074, -0.1278);
        let ba = haversine_distance_meters(51.5074, -0.1278, 40.7128, -74.0060);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn new_york_to_london_is_about_5570_km() {
        let d = haversine_distance_meters(40.7128, -74.0060, 51.5074, -0.1278);
        assert!((d - 5_570_000.0).abs() < 10_000.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_distance_meters(40.0, -74.0, 41.0, -74.0);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn within_distance_respects_tolerance() {
        // Roughly 140 m apart.
        assert!(within_distance(40.7128, -74.0060, 40.7138, -74.0070, 200.0));
        assert!(!within_distance(40.7128, -74.0060, 40.7138, -74.0070, 100.0));
    }

    #[test]
    fn accepts_valid_coordinate() {
        assert!(is_valid_coordinate(40.7128, -74.0060));
        assert!(is_valid_coordinate(-33.8688, 151.2093));
    }

    #[test]
    fn rejects_nan_components() {
        assert!(!is_valid_coordinate(f64::NAN, -74.0060));
        assert!(!is_valid_coordinate(40.7128, f64::NAN));
    }

    #[test]
    fn rejects_zero_components() {
        assert!(!is_valid_coordinate(0.0, -74.0060));
        assert!(!is_valid_coordinate(40.7128, 0.0));
        assert!(!is_valid_coordinate(0.0, 0.0));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(!is_valid_coordinate(91.0, -74.0060));
        assert!(!is_valid_coordinate(-91.0, -74.0060));
        assert!(!is_valid_coordinate(40.7128, 181.0));
        assert!(!is_valid_coordinate(40.7128, -181.0));
    }

    #[test]
    fn range_check_allows_zero_and_edges() {
        assert!(in_valid_range(0.0, 0.0));
        assert!(in_valid_range(90.0, 180.0));
        assert!(in_valid_range(-90.0, -180.0));
        assert!(!in_valid_range(90.1, 0.0));
        assert!(!in_valid_range(0.0, -180.1));
    }
}
