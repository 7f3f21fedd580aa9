//! Core data models for route statistics.

use crate::rules::StatsRules;
use serde::{Deserialize, Serialize};

/// A single sample of a parsed GPS track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    /// Recorded elevation in meters, if the device logged one
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: None,
        }
    }

    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation = Some(elevation_m);
        self
    }

    /// Elevation usable for statistics.
    ///
    /// A recorded `0.0` counts as missing unless the rules say otherwise,
    /// since many devices write zero when they have no barometer or fix.
    pub fn recorded_elevation(&self, rules: &StatsRules) -> Option<f64> {
        self.elevation
            .filter(|ele| ele.is_finite())
            .filter(|ele| !(rules.zero_elevation_is_missing && *ele == 0.0))
    }

    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<RoutePoint> for TrackPoint {
    fn from(point: RoutePoint) -> Self {
        Self {
            lat: point.lat,
            lon: point.lng,
            elevation: point.ele,
        }
    }
}

/// Statistics for one route, rounded to two decimals.
///
/// Field names on the wire follow the ride API (`elevation_gain`,
/// `max_gradient`, `max_descent`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStatistics {
    pub distance_km: f64,
    #[serde(rename = "elevation_gain")]
    pub elevation_gain_m: f64,
    #[serde(rename = "max_gradient")]
    pub max_gradient_pct: f64,
    #[serde(rename = "max_descent")]
    pub max_descent_pct: f64,
    pub pass_count: u32,
}

/// Point handed to the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub ele: Option<f64>,
}

impl From<TrackPoint> for RoutePoint {
    fn from(point: TrackPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lon,
            ele: point.elevation,
        }
    }
}
