//! Tunable thresholds for route statistics.

use crate::spatial::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Configuration for the statistics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRules {
    /// Sphere radius used by the haversine formula
    pub earth_radius_km: f64,
    /// Drop from the last peak that makes a descent count as a pass
    pub pass_drop_threshold_m: f64,
    /// Elevation step that flips the climbing/descending state
    pub direction_change_threshold_m: f64,
    /// Segments shorter than this are ignored for gradients
    pub min_gradient_distance_km: f64,
    /// Treat a recorded elevation of exactly 0.0 as missing
    pub zero_elevation_is_missing: bool,
}

impl Default for StatsRules {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            pass_drop_threshold_m: 50.0,
            direction_change_threshold_m: 5.0,
            min_gradient_distance_km: 0.001, // 1 m
            zero_elevation_is_missing: true,
        }
    }
}

impl StatsRules {
    /// Load overrides from `RIDE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load overrides through `lookup`; unset or unparsable values keep defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            earth_radius_km: parse_var(&lookup, "RIDE_EARTH_RADIUS_KM")
                .filter(|radius: &f64| *radius > 0.0)
                .unwrap_or(defaults.earth_radius_km),
            pass_drop_threshold_m: parse_var(&lookup, "RIDE_PASS_DROP_THRESHOLD_M")
                .unwrap_or(defaults.pass_drop_threshold_m),
            zero_elevation_is_missing: parse_var(&lookup, "RIDE_ZERO_ELEVATION_MISSING")
                .unwrap_or(defaults.zero_elevation_is_missing),
            ..defaults
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|value| value.trim().parse().ok())
}
