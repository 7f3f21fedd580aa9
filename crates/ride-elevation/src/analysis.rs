//! End-to-end route analysis: elevation fallback, then statistics.

use crate::error::ElevationError;
use crate::lookup::ElevationLookup;
use crate::resolver::ElevationResolver;
use ride_core::{
    compute_statistics, has_recorded_elevation, validate_points, RouteStatistics, StatsError,
    StatsRules, TrackPoint,
};
use serde::{Deserialize, Serialize};

/// Where the elevation profile behind the statistics came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationSource {
    /// Recorded in the track itself
    Recorded,
    /// Looked up remotely for every point
    Fetched,
    /// Remote lookup stopped part way
    Partial,
    /// No elevation data at all
    Unavailable,
}

#[derive(Debug)]
pub struct RouteAnalysis {
    pub statistics: RouteStatistics,
    pub elevation_source: ElevationSource,
    /// Set when the remote lookup failed; the statistics are still valid
    /// for the distance and for whatever elevations were obtained.
    pub elevation_error: Option<ElevationError>,
}

/// Analyze a track, fetching elevations when none were recorded.
///
/// Elevation lookup failures never fail the analysis. Malformed
/// coordinates do, before any request is sent.
pub async fn analyze_route<L: ElevationLookup>(
    points: &[TrackPoint],
    resolver: &ElevationResolver<L>,
    rules: &StatsRules,
) -> Result<RouteAnalysis, StatsError> {
    tracing::debug!(points = points.len(), "Analyzing route");

    if points.len() < 2 {
        return Ok(RouteAnalysis {
            statistics: RouteStatistics::default(),
            elevation_source: ElevationSource::Unavailable,
            elevation_error: None,
        });
    }
    validate_points(points)?;

    if has_recorded_elevation(points, rules) {
        return Ok(RouteAnalysis {
            statistics: compute_statistics(points, &[], rules)?,
            elevation_source: ElevationSource::Recorded,
            elevation_error: None,
        });
    }

    tracing::info!(
        points = points.len(),
        "No elevation data in track, fetching from elevation service"
    );
    let resolved = resolver.fetch_all(points).await;
    let elevation_source = if resolved.covers(points.len()) {
        ElevationSource::Fetched
    } else if resolved.elevations.is_empty() {
        ElevationSource::Unavailable
    } else {
        ElevationSource::Partial
    };
    if let Some(err) = &resolved.error {
        tracing::warn!(
            fetched = resolved.elevations.len(),
            points = points.len(),
            "Continuing without full elevation data: {}",
            err
        );
    }

    Ok(RouteAnalysis {
        statistics: compute_statistics(points, &resolved.elevations, rules)?,
        elevation_source,
        elevation_error: resolved.error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OpenElevationClient;
    use crate::config::ElevationConfig;
    use crate::resolver::tests::{track, StubLookup};
    use axum::routing::post;
    use axum::Router;
    use std::time::Duration;

    fn no_delay() -> ElevationConfig {
        ElevationConfig {
            batch_delay: Duration::ZERO,
            ..ElevationConfig::default()
        }
    }

    fn zero_elevation_track(count: usize) -> Vec<TrackPoint> {
        track(count)
            .into_iter()
            .map(|point| point.with_elevation(0.0))
            .collect()
    }

    #[tokio::test]
    async fn zero_elevations_trigger_remote_lookup() {
        let resolver = ElevationResolver::new(StubLookup::default(), &no_delay());
        let rules = StatsRules::default();
        let points = zero_elevation_track(250);

        let analysis = analyze_route(&points, &resolver, &rules).await.unwrap();

        assert_eq!(resolver.lookup().batch_sizes(), vec![100, 100, 50]);
        assert_eq!(analysis.elevation_source, ElevationSource::Fetched);
        assert!(analysis.elevation_error.is_none());

        let recorded: Vec<TrackPoint> = points
            .iter()
            .map(|point| point.with_elevation(point.lat * 1000.0))
            .collect();
        let direct = compute_statistics(&recorded, &[], &rules).unwrap();
        assert_eq!(analysis.statistics, direct);
        assert!(analysis.statistics.elevation_gain_m > 0.0);
    }

    #[tokio::test]
    async fn recorded_elevation_skips_lookup() {
        let resolver = ElevationResolver::new(StubLookup::default(), &no_delay());
        let mut points = zero_elevation_track(20);
        points[7].elevation = Some(1500.0);

        let analysis = analyze_route(&points, &resolver, &StatsRules::default())
            .await
            .unwrap();

        assert!(resolver.lookup().batch_sizes().is_empty());
        assert_eq!(analysis.elevation_source, ElevationSource::Recorded);
    }

    #[tokio::test]
    async fn failed_lookup_still_yields_distance() {
        let resolver = ElevationResolver::new(StubLookup::failing_on(1), &no_delay());
        let points = track(50);

        let analysis = analyze_route(&points, &resolver, &StatsRules::default())
            .await
            .unwrap();

        assert_eq!(analysis.elevation_source, ElevationSource::Unavailable);
        assert!(matches!(
            analysis.elevation_error,
            Some(ElevationError::Status(503))
        ));
        assert!(analysis.statistics.distance_km > 0.5);
        assert_eq!(analysis.statistics.elevation_gain_m, 0.0);
        assert_eq!(analysis.statistics.pass_count, 0);
    }

    #[tokio::test]
    async fn partial_lookup_uses_completed_batches() {
        let resolver = ElevationResolver::new(StubLookup::failing_on(2), &no_delay());
        let points = track(150);

        let analysis = analyze_route(&points, &resolver, &StatsRules::default())
            .await
            .unwrap();

        assert_eq!(analysis.elevation_source, ElevationSource::Partial);
        // 100 fetched points, 0.1 m apart vertically
        assert_eq!(analysis.statistics.elevation_gain_m, 9.9);
    }

    #[tokio::test]
    async fn malformed_track_fails_before_lookup() {
        let resolver = ElevationResolver::new(StubLookup::default(), &no_delay());
        let mut points = track(10);
        points[4].lon = 200.0;

        let err = analyze_route(&points, &resolver, &StatsRules::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StatsError::MalformedPoint { index: 4, .. }));
        assert!(resolver.lookup().batch_sizes().is_empty());
    }

    #[tokio::test]
    async fn short_track_is_empty_analysis() {
        let resolver = ElevationResolver::new(StubLookup::default(), &no_delay());
        let analysis = analyze_route(&track(1), &resolver, &StatsRules::default())
            .await
            .unwrap();
        assert_eq!(analysis.statistics, RouteStatistics::default());
        assert!(resolver.lookup().batch_sizes().is_empty());
    }

    #[test]
    fn elevation_source_serializes_snake_case() {
        let sources = [
            (ElevationSource::Recorded, "recorded"),
            (ElevationSource::Fetched, "fetched"),
            (ElevationSource::Partial, "partial"),
            (ElevationSource::Unavailable, "unavailable"),
        ];
        for (source, name) in sources {
            let value = serde_json::to_value(source).unwrap();
            assert_eq!(value, serde_json::json!(name));
            let parsed: ElevationSource = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, source);
        }
    }

    #[tokio::test]
    async fn slow_service_times_out_to_distance_only() {
        let router = Router::new().route(
            "/api/v1/lookup",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{\"results\": []}"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve stub");
        });
        let config = ElevationConfig {
            api_url: format!("http://{}/api/v1/lookup", addr),
            request_timeout: Duration::from_millis(300),
            ..no_delay()
        };
        let client = OpenElevationClient::new(&config).expect("client");
        let resolver = ElevationResolver::new(client, &config);
        let points = track(30);

        let analysis = analyze_route(&points, &resolver, &StatsRules::default())
            .await
            .unwrap();

        assert!(matches!(
            analysis.elevation_error,
            Some(ElevationError::Transport(_))
        ));
        assert_eq!(analysis.elevation_source, ElevationSource::Unavailable);
        let distance_only = compute_statistics(&points, &[], &StatsRules::default()).unwrap();
        assert_eq!(analysis.statistics, distance_only);
        assert_eq!(analysis.statistics.elevation_gain_m, 0.0);
        assert!(analysis.statistics.distance_km > 0.0);
    }

    #[tokio::test]
    async fn unreachable_service_degrades_gracefully() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let config = ElevationConfig {
            api_url: format!("http://{}/api/v1/lookup", addr),
            request_timeout: Duration::from_secs(2),
            ..no_delay()
        };
        let client = OpenElevationClient::new(&config).expect("client");
        let resolver = ElevationResolver::new(client, &config);

        let analysis = analyze_route(&track(30), &resolver, &StatsRules::default())
            .await
            .unwrap();

        assert!(matches!(
            analysis.elevation_error,
            Some(ElevationError::Transport(_))
        ));
        assert!(analysis.statistics.distance_km > 0.0);
    }
}
