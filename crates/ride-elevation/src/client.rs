//! Open-Elevation HTTP client.

use crate::config::ElevationConfig;
use crate::error::ElevationError;
use crate::lookup::{ElevationLookup, Location};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ElevationRequest<'a> {
    locations: &'a [Location],
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    results: Vec<ElevationResult>,
}

/// Only the elevation is read; the echoed coordinates are ignored.
#[derive(Debug, Deserialize)]
struct ElevationResult {
    elevation: f64,
}

/// Client for an Open-Elevation compatible `POST /api/v1/lookup` endpoint.
#[derive(Debug, Clone)]
pub struct OpenElevationClient {
    client: Client,
    api_url: String,
}

impl OpenElevationClient {
    /// Create a client with the configured URL and per-request timeout.
    pub fn new(config: &ElevationConfig) -> Result<Self, ElevationError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ElevationError::Client)?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }
}

impl ElevationLookup for OpenElevationClient {
    // Body encoding and decoding go through serde_json directly so the two
    // failures stay distinct from transport errors.
    async fn lookup(&self, locations: &[Location]) -> Result<Vec<f64>, ElevationError> {
        let body = serde_json::to_vec(&ElevationRequest { locations })
            .map_err(ElevationError::Encode)?;

        let response = self
            .client
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ElevationError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElevationError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(ElevationError::Transport)?;
        let payload: ElevationResponse =
            serde_json::from_slice(&bytes).map_err(ElevationError::Decode)?;

        tracing::debug!(
            requested = locations.len(),
            returned = payload.results.len(),
            "Elevation lookup complete"
        );
        Ok(payload
            .results
            .into_iter()
            .map(|result| result.elevation)
            .collect())
    }
}
