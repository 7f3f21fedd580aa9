//! Elevation lookup failures.
//!
//! None of these are retried; the resolver keeps whatever elevations it
//! already has and reports the error alongside them.

#[derive(Debug, thiserror::Error)]
pub enum ElevationError {
    #[error("failed to build elevation HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to encode elevation request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("elevation request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("elevation service returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode elevation response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("elevation service returned {actual} results for {expected} locations")]
    CountMismatch { expected: usize, actual: usize },
}
