//! Great-circle distance on a spherical Earth.

use crate::models::TrackPoint;
use crate::rules::StatsRules;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in decimal degrees.
///
/// # Returns
/// Distance in the unit of `radius` (kilometers for [`EARTH_RADIUS_KM`])
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * radius * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance between two track points in kilometers.
pub fn point_distance_km(a: &TrackPoint, b: &TrackPoint, rules: &StatsRules) -> f64 {
    haversine_distance(a.lat, a.lon, b.lat, b.lon, rules.earth_radius_km)
}
