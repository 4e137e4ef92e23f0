//! Geographic utilities.

use crate::Sample;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two lat/lon pairs (degrees).
///
/// The haversine term is clamped to `[0, 1]` so rounding near antipodal or
/// coincident points cannot push `sqrt` out of its domain.
///
/// # Example
/// ```
/// use tracestats::geo_utils::haversine_distance;
/// let d = haversine_distance(48.0, -122.0, 48.0005, -122.0);
/// assert!((d - 55.6).abs() < 0.1);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Haversine distance between two samples in meters.
pub fn sample_distance(a: &Sample, b: &Sample) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Meters per degree of latitude (approximately constant).
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Convert a north/east displacement in meters into a latitude/longitude delta
/// in degrees at the given latitude.
pub fn meters_to_degrees(north_m: f64, east_m: f64, latitude: f64) -> (f64, f64) {
    let dlat = north_m / METERS_PER_DEGREE_LAT;
    let cos_lat = latitude.to_radians().cos().max(1e-6);
    let dlon = east_m / (METERS_PER_DEGREE_LAT * cos_lat);
    (dlat, dlon)
}
