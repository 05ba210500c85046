//! Greedy proximity clustering of geotagged photos.
//!
//! This is intentionally not k-means or DBSCAN. Each unvisited photo, in
//! input order, seeds a cluster and claims every remaining photo within
//! the threshold distance of *the seed*; membership is never tested
//! against the running center or against other members, so two members of
//! one cluster may sit up to twice the threshold apart. Downstream
//! consumers depend on these exact semantics (including the input-order
//! dependence), so they must not be "corrected" to a density-based method.

use std::collections::HashSet;

use photo_map_location_models::{GeoPhoto, LocationCluster};

use crate::LocationAnalyzer;

/// Default clustering threshold in meters for ad-hoc grouping calls.
pub const DEFAULT_CLUSTER_DISTANCE_METERS: f64 = 100.0;

impl LocationAnalyzer {
    /// Partitions geotagged photos into proximity clusters.
    ///
    /// Single greedy pass over `photos` in input order:
    /// - a photo already claimed by an earlier cluster is skipped (the
    ///   visited set is keyed by photo id, so a duplicated id is only ever
    ///   clustered once);
    /// - an unclaimed photo becomes the seed of a new cluster, and the
    ///   **entire remaining list** is scanned for unclaimed photos within
    ///   `max_distance_meters` of that seed;
    /// - once membership is final, the center is recomputed as the
    ///   unweighted mean of all member coordinates. `radius` is the
    ///   threshold parameter, not a measured extent.
    ///
    /// Every photo lands in exactly one cluster; an isolated photo yields
    /// a singleton. Clusters are returned in seed-encounter order. The
    /// scan is O(n²) in the number of geotagged photos with no internal
    /// chunking or early exit, which callers must budget for on large
    /// libraries.
    #[must_use]
    pub fn cluster_photos(
        &self,
        photos: &[GeoPhoto],
        max_distance_meters: f64,
    ) -> Vec<LocationCluster> {
        let mut clusters = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();

        for seed in photos {
            if visited.contains(seed.id.as_str()) {
                continue;
            }
            visited.insert(seed.id.as_str());

            let mut members = vec![seed.clone()];

            for other in photos {
                if visited.contains(other.id.as_str()) {
                    continue;
                }

                let distance = photo_map_geo::haversine_distance_meters(
                    seed.latitude,
                    seed.longitude,
                    other.latitude,
                    other.longitude,
                );

                if distance <= max_distance_meters {
                    members.push(other.clone());
                    visited.insert(other.id.as_str());
                }
            }

            #[allow(clippy::cast_precision_loss)]
            let member_count = members.len() as f64;
            let center_latitude = members.iter().map(|p| p.latitude).sum::<f64>() / member_count;
            let center_longitude = members.iter().map(|p| p.longitude).sum::<f64>() / member_count;

            clusters.push(LocationCluster {
                center_latitude,
                center_longitude,
                photos: members,
                radius: max_distance_meters,
            });
        }

        log::info!("Created {} location clusters", clusters.len());

        clusters
    }
}
