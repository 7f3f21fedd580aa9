//! Ride Core - route statistics for club rides
//!
//! Turns an ordered GPS track into distance, climbing, gradient and
//! mountain-pass figures, and flattens parsed GPX documents into point
//! lists for map rendering. Everything here is synchronous and free of I/O.

pub mod credit;
pub mod error;
pub mod extract;
pub mod models;
pub mod rules;
pub mod spatial;
pub mod stats;

pub use credit::final_distance_km;
pub use error::{ExtractError, StatsError};
pub use extract::{extract_route_points, extract_track_points, read_gpx};
pub use models::{RoutePoint, RouteStatistics, TrackPoint};
pub use rules::StatsRules;
pub use spatial::{haversine_distance, point_distance_km, EARTH_RADIUS_KM};
pub use stats::{
    compute_statistics, has_recorded_elevation, resolve_elevation, round_to_hundredths,
    validate_points, PassDetector, Slope,
};
