#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]
// `LocationAnalyzer` carries no state; its methods take `&self` only so
// callers hold one value and the call surface stays uniform.
#![allow(clippy::unused_self)]

//! Geographic clustering and hotspot analysis for photo libraries.
//!
//! The pipeline runs entirely in memory over the photo records the backend
//! supplies: coordinates are resolved per photo, geotagged photos are
//! grouped by proximity, dense groups become named hotspots, and coverage
//! statistics, radius search, and bounding boxes round out the query
//! surface. Nothing here performs I/O or keeps state between calls; every
//! operation is synchronous and total over its input.
//!
//! Clustering is a single-pass greedy grouping, not a density-based
//! algorithm: each unvisited photo seeds a cluster and pulls in every
//! remaining photo within the threshold distance *of that seed*. The
//! result depends on input order, and callers that need reproducible
//! output must supply photos in a stable order.

mod cluster;
mod extract;
mod hotspot;
mod stats;

pub use cluster::DEFAULT_CLUSTER_DISTANCE_METERS;
pub use hotspot::{DEFAULT_MIN_HOTSPOT_PHOTOS, HOTSPOT_CLUSTER_DISTANCE_METERS};
pub use stats::DEFAULT_NEARBY_RADIUS_METERS;

/// Entry point for every location analysis operation.
///
/// Stateless: construct one wherever needed, or share a single instance
/// across threads. Concurrent calls never observe each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationAnalyzer;

impl LocationAnalyzer {
    /// Creates an analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
