//! Hotspot detection: dense photo clusters promoted to named places.

use photo_map_location_models::{GeoPhoto, LocationHotspot};
use photo_map_photos_models::PhotoRecord;

use crate::LocationAnalyzer;

/// Clustering threshold in meters used for hotspot detection.
///
/// Deliberately fixed rather than caller-tunable: hotspots answer "where
/// do you photograph a lot" at walking-distance granularity, independent
/// of whatever threshold ad-hoc clustering calls use.
pub const HOTSPOT_CLUSTER_DISTANCE_METERS: f64 = 100.0;

/// Default minimum member count for a cluster to qualify as a hotspot.
pub const DEFAULT_MIN_HOTSPOT_PHOTOS: usize = 10;

/// Member counts at which the size-based name fallback upgrades.
const FREQUENT_LOCATION_THRESHOLD: usize = 50;
const REGULAR_LOCATION_THRESHOLD: usize = 20;

impl LocationAnalyzer {
    /// Finds densely photographed places in a photo library.
    ///
    /// Extracts coordinates, clusters them at the fixed
    /// [`HOTSPOT_CLUSTER_DISTANCE_METERS`] threshold, keeps clusters with
    /// at least `min_photo_count` members, and derives a presentation
    /// record per survivor: cluster center, member count, denormalized
    /// member copies, and a best-effort suggested name.
    ///
    /// The result is sorted by member count, most photographed first. The
    /// sort is stable, so hotspots with equal counts stay in
    /// seed-encounter order and repeated calls over identical input
    /// produce identical output.
    #[must_use]
    pub fn find_hotspots(
        &self,
        photos: &[PhotoRecord],
        min_photo_count: usize,
    ) -> Vec<LocationHotspot> {
        if photos.is_empty() {
            return Vec::new();
        }

        let geotagged = self.extract_coordinates(photos);
        let clusters = self.cluster_photos(&geotagged, HOTSPOT_CLUSTER_DISTANCE_METERS);

        let mut hotspots: Vec<LocationHotspot> = clusters
            .into_iter()
            .filter(|cluster| cluster.photos.len() >= min_photo_count)
            .map(|cluster| {
                let suggested_name = suggest_name(&cluster.photos);

                LocationHotspot {
                    latitude: cluster.center_latitude,
                    longitude: cluster.center_longitude,
                    photo_count: cluster.photos.len(),
                    photos: cluster.photos.into_iter().map(Into::into).collect(),
                    suggested_name,
                }
            })
            .collect();

        hotspots.sort_by(|a, b| b.photo_count.cmp(&a.photo_count));

        log::info!("Found {} location hotspots", hotspots.len());

        hotspots
    }
}

/// Derives a human-readable name for a group of photos, or `None` for an
/// empty group.
///
/// First applicable rule wins:
/// 1. the most frequent AI place name among members, ties broken by which
///    name was seen first;
/// 2. when more than half the members open with a typed detected event,
///    `"<type> Location"` using the first type collected;
/// 3. a size-based label (`"Frequent Location"` / `"Regular Location"` /
///    `"Photo Location"`).
fn suggest_name(photos: &[GeoPhoto]) -> Option<String> {
    if photos.is_empty() {
        return None;
    }

    let mut name_counts: Vec<(&str, usize)> = Vec::new();
    for photo in photos {
        if let Some(name) = photo.metadata.ai_place_name() {
            if let Some(entry) = name_counts.iter_mut().find(|(seen, _)| *seen == name) {
                entry.1 += 1;
            } else {
                name_counts.push((name, 1));
            }
        }
    }
    if !name_counts.is_empty() {
        let mut best = name_counts[0];
        for &(name, count) in &name_counts[1..] {
            if count > best.1 {
                best = (name, count);
            }
        }
        return Some(best.0.to_string());
    }

    let event_types: Vec<&str> = photos
        .iter()
        .filter_map(|photo| photo.metadata.first_event_type())
        .collect();
    if event_types.len() * 2 > photos.len() {
        return Some(format!("{} Location", event_types[0]));
    }

    Some(
        if photos.len() >= FREQUENT_LOCATION_THRESHOLD {
            "Frequent Location"
        } else if photos.len() >= REGULAR_LOCATION_THRESHOLD {
            "Regular Location"
        } else {
            "Photo Location"
        }
        .to_string(),
    )
}
