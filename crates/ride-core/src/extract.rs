//! Flattening of parsed GPX documents into ordered point lists.
//!
//! Track segments come first, in document order, followed by route points.
//! Nothing is deduplicated or filtered.

use crate::error::ExtractError;
use crate::models::{RoutePoint, TrackPoint};
use gpx::{Gpx, Waypoint};
use std::io::Read;

/// Parse a GPX document from `reader`.
pub fn read_gpx<R: Read>(reader: R) -> Result<Gpx, ExtractError> {
    Ok(gpx::read(reader)?)
}

/// All track and route points as statistics input.
pub fn extract_track_points(gpx: &Gpx) -> Vec<TrackPoint> {
    waypoints(gpx).map(to_track_point).collect()
}

/// All track and route points in the shape the map view expects.
pub fn extract_route_points(gpx: &Gpx) -> Vec<RoutePoint> {
    waypoints(gpx)
        .map(|waypoint| RoutePoint::from(to_track_point(waypoint)))
        .collect()
}

fn waypoints<'a>(gpx: &'a Gpx) -> impl Iterator<Item = &'a Waypoint> + 'a {
    let track_points = gpx
        .tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter());
    let route_points = gpx.routes.iter().flat_map(|route| route.points.iter());
    track_points.chain(route_points)
}

fn to_track_point(waypoint: &Waypoint) -> TrackPoint {
    let point = waypoint.point();
    TrackPoint {
        lat: point.y(),
        lon: point.x(),
        elevation: waypoint.elevation,
    }
}
