//! Single-pass route statistics.
//!
//! Walks the track once, accumulating distance, elevation gain and the
//! steepest up/down gradients, while a [`PassDetector`] follows the
//! climbing/descending state to count mountain passes.

use crate::error::StatsError;
use crate::models::{RouteStatistics, TrackPoint};
use crate::rules::StatsRules;
use crate::spatial::point_distance_km;

/// Direction the profile is currently heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    Climbing,
    Descending,
}

/// Climbing/descending state machine that counts passes.
///
/// A pass is a peak followed by a drop of more than
/// `pass_drop_threshold_m`. Steps smaller than
/// `direction_change_threshold_m` never flip the state, so GPS jitter and
/// small ripples are absorbed.
#[derive(Debug, Clone)]
pub struct PassDetector {
    slope: Slope,
    last_peak_m: f64,
    pass_count: u32,
    direction_change_m: f64,
    pass_drop_m: f64,
}

impl PassDetector {
    /// Start in the climbing state with the peak at `start_elevation_m`.
    pub fn new(start_elevation_m: f64, rules: &StatsRules) -> Self {
        Self {
            slope: Slope::Climbing,
            last_peak_m: start_elevation_m,
            pass_count: 0,
            direction_change_m: rules.direction_change_threshold_m,
            pass_drop_m: rules.pass_drop_threshold_m,
        }
    }

    /// Feed one step between two resolved elevations.
    pub fn observe(&mut self, prev_m: f64, curr_m: f64) {
        let diff = curr_m - prev_m;
        match self.slope {
            Slope::Climbing if diff < -self.direction_change_m => {
                if curr_m - self.last_peak_m < -self.pass_drop_m {
                    self.pass_count += 1;
                }
                self.slope = Slope::Descending;
                self.last_peak_m = prev_m;
            }
            Slope::Descending if diff > self.direction_change_m => {
                self.slope = Slope::Climbing;
                self.last_peak_m = prev_m;
            }
            _ => {}
        }

        if self.slope == Slope::Climbing && curr_m > self.last_peak_m {
            self.last_peak_m = curr_m;
        }
    }

    pub fn slope(&self) -> Slope {
        self.slope
    }

    pub fn last_peak_m(&self) -> f64 {
        self.last_peak_m
    }

    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }
}

/// Round to two decimals, halves away from zero.
///
/// Operates on the binary value: `12.345` is stored as exactly
/// `1234.5 / 100` after scaling and rounds up, while `1.005` scales to
/// `100.4999…` and rounds down.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// True when any point carries a usable recorded elevation.
pub fn has_recorded_elevation(points: &[TrackPoint], rules: &StatsRules) -> bool {
    points
        .iter()
        .any(|point| point.recorded_elevation(rules).is_some())
}

/// Elevation for point `index`: recorded value first, then the fetched one.
pub fn resolve_elevation(
    points: &[TrackPoint],
    fetched: &[f64],
    index: usize,
    rules: &StatsRules,
) -> Option<f64> {
    points
        .get(index)
        .and_then(|point| point.recorded_elevation(rules))
        .or_else(|| fetched.get(index).copied().filter(|ele| ele.is_finite()))
}

/// Reject points whose coordinates cannot be used for distance math.
pub fn validate_points(points: &[TrackPoint]) -> Result<(), StatsError> {
    match points
        .iter()
        .enumerate()
        .find(|(_, point)| !point.has_valid_coordinates())
    {
        Some((index, point)) => Err(StatsError::MalformedPoint {
            index,
            lat: point.lat,
            lon: point.lon,
        }),
        None => Ok(()),
    }
}

/// Compute statistics for an ordered track.
///
/// `fetched` holds remotely looked-up elevations by point index; it may be
/// empty or shorter than `points` when the lookup failed part way. Points
/// without any elevation still count toward distance.
///
/// Fewer than two points yield all-zero statistics.
pub fn compute_statistics(
    points: &[TrackPoint],
    fetched: &[f64],
    rules: &StatsRules,
) -> Result<RouteStatistics, StatsError> {
    if points.len() < 2 {
        return Ok(RouteStatistics::default());
    }
    validate_points(points)?;

    let mut acc = Accumulator::default();
    let mut prev_elevation = resolve_elevation(points, fetched, 0, rules);
    let mut passes = prev_elevation.map(|ele| PassDetector::new(ele, rules));

    for (offset, pair) in points.windows(2).enumerate() {
        let index = offset + 1;
        let distance_km = point_distance_km(&pair[0], &pair[1], rules);
        acc.distance_km += distance_km;

        let Some(curr) = resolve_elevation(points, fetched, index, rules) else {
            continue;
        };

        match prev_elevation {
            Some(prev) => {
                acc.add_step(prev, curr, distance_km, rules);
                if let Some(detector) = passes.as_mut() {
                    detector.observe(prev, curr);
                }
            }
            None => passes = Some(PassDetector::new(curr, rules)),
        }
        prev_elevation = Some(curr);
    }

    Ok(acc.finish(passes.map(|detector| detector.pass_count()).unwrap_or(0)))
}

#[derive(Debug, Default)]
struct Accumulator {
    distance_km: f64,
    elevation_gain_m: f64,
    max_gradient_pct: f64,
    max_descent_pct: f64,
}

impl Accumulator {
    fn add_step(&mut self, prev_m: f64, curr_m: f64, distance_km: f64, rules: &StatsRules) {
        let diff = curr_m - prev_m;
        if diff > 0.0 {
            self.elevation_gain_m += diff;
        }

        if distance_km > rules.min_gradient_distance_km {
            let gradient = diff / (distance_km * 1000.0) * 100.0;
            if gradient > self.max_gradient_pct {
                self.max_gradient_pct = gradient;
            }
            if gradient < 0.0 && gradient.abs() > self.max_descent_pct {
                self.max_descent_pct = gradient.abs();
            }
        }
    }

    fn finish(self, pass_count: u32) -> RouteStatistics {
        RouteStatistics {
            distance_km: round_to_hundredths(self.distance_km),
            elevation_gain_m: round_to_hundredths(self.elevation_gain_m),
            max_gradient_pct: round_to_hundredths(self.max_gradient_pct),
            max_descent_pct: round_to_hundredths(self.max_descent_pct),
            pass_count,
        }
    }
}
