//! Capability to resolve elevations for a batch of coordinates.

use crate::error::ElevationError;
use ride_core::TrackPoint;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A coordinate sent to the elevation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&TrackPoint> for Location {
    fn from(point: &TrackPoint) -> Self {
        Self {
            latitude: point.lat,
            longitude: point.lon,
        }
    }
}

/// Batch elevation source.
///
/// Implementations return one elevation per location, in request order.
pub trait ElevationLookup {
    fn lookup(
        &self,
        locations: &[Location],
    ) -> impl Future<Output = Result<Vec<f64>, ElevationError>> + Send;
}
