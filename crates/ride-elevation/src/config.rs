//! Elevation service configuration from environment.

use std::env;
use std::time::Duration;

pub const OPEN_ELEVATION_URL: &str = "https://api.open-elevation.com/api/v1/lookup";
/// Largest batch the public Open-Elevation instance accepts.
pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct ElevationConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub batch_size: usize,
    /// Pause between consecutive batches
    pub batch_delay: Duration,
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            api_url: OPEN_ELEVATION_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            batch_size: MAX_BATCH_SIZE,
            batch_delay: Duration::from_millis(100),
        }
    }
}

impl ElevationConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_url: lookup("ELEVATION_API_URL")
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout: lookup("ELEVATION_TIMEOUT_S")
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            batch_size: lookup("ELEVATION_BATCH_SIZE")
                .and_then(|s| s.trim().parse().ok())
                .map(clamp_batch_size)
                .unwrap_or(defaults.batch_size),
            batch_delay: lookup("ELEVATION_BATCH_DELAY_MS")
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.batch_delay),
        }
    }
}

pub fn clamp_batch_size(size: usize) -> usize {
    size.clamp(1, MAX_BATCH_SIZE)
}
