//! Batched elevation fetching with a courtesy pause between batches.

use crate::config::{clamp_batch_size, ElevationConfig};
use crate::error::ElevationError;
use crate::lookup::{ElevationLookup, Location};
use ride_core::TrackPoint;
use std::time::Duration;

/// Elevations obtained for a track, by point index.
///
/// `elevations` covers a prefix of the track. When a batch fails it stops
/// at the last complete batch and `error` holds the cause.
#[derive(Debug, Default)]
pub struct ResolvedElevations {
    pub elevations: Vec<f64>,
    pub error: Option<ElevationError>,
}

impl ResolvedElevations {
    pub fn covers(&self, point_count: usize) -> bool {
        self.error.is_none() && self.elevations.len() == point_count
    }
}

/// Splits a track into batches and queries them one after another.
#[derive(Debug, Clone)]
pub struct ElevationResolver<L> {
    lookup: L,
    batch_size: usize,
    batch_delay: Duration,
}

impl<L: ElevationLookup> ElevationResolver<L> {
    pub fn new(lookup: L, config: &ElevationConfig) -> Self {
        Self {
            lookup,
            batch_size: clamp_batch_size(config.batch_size),
            batch_delay: config.batch_delay,
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch elevations for every point.
    ///
    /// Batches run sequentially. The first failure stops the fetch; nothing
    /// is retried.
    pub async fn fetch_all(&self, points: &[TrackPoint]) -> ResolvedElevations {
        let total_batches = points.len().div_ceil(self.batch_size);
        let mut elevations = Vec::with_capacity(points.len());

        for (batch_index, batch) in points.chunks(self.batch_size).enumerate() {
            if batch_index > 0 && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }

            let locations: Vec<Location> = batch.iter().map(Location::from).collect();
            let result = self.lookup.lookup(&locations).await.and_then(|values| {
                if values.len() == locations.len() {
                    Ok(values)
                } else {
                    Err(ElevationError::CountMismatch {
                        expected: locations.len(),
                        actual: values.len(),
                    })
                }
            });

            match result {
                Ok(values) => elevations.extend(values),
                Err(err) => {
                    tracing::warn!(
                        batch = batch_index + 1,
                        total_batches,
                        fetched = elevations.len(),
                        "Elevation batch failed: {}",
                        err
                    );
                    return ResolvedElevations {
                        elevations,
                        error: Some(err),
                    };
                }
            }
        }

        ResolvedElevations {
            elevations,
            error: None,
        }
    }
}
