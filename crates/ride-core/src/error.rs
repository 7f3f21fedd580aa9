//! Error types for route statistics and extraction.

/// Failures that abort a statistics computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("malformed point at index {index}: lat={lat}, lon={lon}")]
    MalformedPoint { index: usize, lat: f64, lon: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),
}
