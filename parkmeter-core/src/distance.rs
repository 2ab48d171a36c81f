//! great-circle distance between WGS84 coordinates.

use crate::model::GeoPoint;

/// Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// haversine distance in kilometers between two lat/lon pairs in degrees.
///
/// symmetric and zero for coincident points. performs no validation: the
/// result for non-finite or out-of-range input is meaningless, so callers
/// must filter with [`GeoPoint::is_valid`] first.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// [`haversine_distance_km`] between two points.
pub fn distance_km(src: &GeoPoint, dst: &GeoPoint) -> f64 {
    haversine_distance_km(src.lat, src.lon, dst.lat, dst.lon)
}
