//! Tests for geo_utils module

use tracestats::Sample;
use tracestats::geo_utils::*;

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_haversine_distance_same_point() {
    assert_eq!(haversine_distance(51.5074, -0.1278, 51.5074, -0.1278), 0.0);
    assert_eq!(haversine_distance(-33.8688, 151.2093, -33.8688, 151.2093), 0.0);
}

#[test]
fn test_haversine_distance_known_value() {
    // London to Paris is approximately 344 km
    let dist = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
    assert!(approx_eq(dist, 343_560.0, 5000.0)); // Within 5km
}

#[test]
fn test_haversine_distance_symmetric() {
    let pairs = [
        (48.0, -122.0, 48.0005, -122.0),
        (51.5074, -0.1278, 40.7128, -74.0060),
        (-45.0, 170.0, 45.0, -170.0),
    ];
    for (lat1, lon1, lat2, lon2) in pairs {
        assert_eq!(
            haversine_distance(lat1, lon1, lat2, lon2),
            haversine_distance(lat2, lon2, lat1, lon1)
        );
    }
}

#[test]
fn test_haversine_distance_antipodal_is_finite() {
    // Rounding can push the haversine term slightly above 1 here
    let dist = haversine_distance(0.0, 0.0, 0.0, 180.0);
    assert!(dist.is_finite());
    assert!(approx_eq(dist, std::f64::consts::PI * EARTH_RADIUS_METERS, 1.0));

    let pole_to_pole = haversine_distance(90.0, 0.0, -90.0, 0.0);
    assert!(approx_eq(pole_to_pole, std::f64::consts::PI * EARTH_RADIUS_METERS, 1.0));
}

#[test]
fn test_haversine_distance_small_separation() {
    // 0.0005 degrees of latitude is about 55.6 m
    let dist = haversine_distance(48.0, -122.0, 48.0005, -122.0);
    assert!(approx_eq(dist, 55.6, 0.1));
}

#[test]
fn test_sample_distance_matches_haversine() {
    let a = Sample::new(0.0, 48.0, -122.0);
    let b = Sample::new(10.0, 48.01, -122.01);
    assert_eq!(
        sample_distance(&a, &b),
        haversine_distance(48.0, -122.0, 48.01, -122.01)
    );
}

#[test]
fn test_meters_to_degrees() {
    // At equator, 111km = 1 degree in both directions
    let (dlat, dlon) = meters_to_degrees(111_320.0, 111_320.0, 0.0);
    assert!(approx_eq(dlat, 1.0, 0.01));
    assert!(approx_eq(dlon, 1.0, 0.01));

    // At higher latitude, same eastward distance = more degrees
    let (_, dlon_45) = meters_to_degrees(0.0, 111_320.0, 45.0);
    assert!(dlon_45 > 1.0);
}
