//! Ride Elevation - remote elevation fallback for club rides
//!
//! Fills in elevations for tracks recorded without them by querying an
//! Open-Elevation compatible batch endpoint, then runs the route statistics
//! from `ride-core` over the result.

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod resolver;

pub use analysis::{analyze_route, ElevationSource, RouteAnalysis};
pub use client::OpenElevationClient;
pub use config::ElevationConfig;
pub use error::ElevationError;
pub use lookup::{ElevationLookup, Location};
pub use resolver::{ElevationResolver, ResolvedElevations};
