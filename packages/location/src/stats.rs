//! Coverage statistics and ad-hoc spatial queries.

use photo_map_location_models::{GeoBounds, GeoPhoto, LocationStats};
use photo_map_photos_models::PhotoRecord;

use crate::LocationAnalyzer;

/// Default radius in meters for nearby-photo queries.
pub const DEFAULT_NEARBY_RADIUS_METERS: f64 = 1000.0;

impl LocationAnalyzer {
    /// Computes geotag coverage statistics for a photo library.
    ///
    /// `existing_location_count` is the number of saved locations the
    /// backend tracks. Both ratios degrade to `0.0` instead of dividing
    /// by zero: coverage on an empty library, the average when no
    /// locations exist.
    #[must_use]
    pub fn calculate_location_stats(
        &self,
        photos: &[PhotoRecord],
        existing_location_count: usize,
    ) -> LocationStats {
        let geotagged = self.extract_coordinates(photos).len();

        #[allow(clippy::cast_precision_loss)]
        let coverage_percentage = if photos.is_empty() {
            0.0
        } else {
            (geotagged as f64 / photos.len() as f64) * 100.0
        };

        #[allow(clippy::cast_precision_loss)]
        let average_photos_per_location = if existing_location_count == 0 {
            0.0
        } else {
            geotagged as f64 / existing_location_count as f64
        };

        LocationStats {
            total_photos_with_location: geotagged,
            coverage_percentage,
            average_photos_per_location,
        }
    }

    /// Returns the geotagged photos within `radius_meters` of a point, in
    /// input order. A plain distance filter; no clustering is involved.
    #[must_use]
    pub fn nearby_photos(
        &self,
        latitude: f64,
        longitude: f64,
        photos: &[PhotoRecord],
        radius_meters: f64,
    ) -> Vec<GeoPhoto> {
        self.extract_coordinates(photos)
            .into_iter()
            .filter(|photo| {
                photo_map_geo::haversine_distance_meters(
                    latitude,
                    longitude,
                    photo.latitude,
                    photo.longitude,
                ) <= radius_meters
            })
            .collect()
    }

    /// Axis-aligned bounding box over a geotagged set, or `None` when the
    /// set is empty.
    #[must_use]
    pub fn location_bounds(&self, photos: &[GeoPhoto]) -> Option<GeoBounds> {
        let first = photos.first()?;

        let mut bounds = GeoBounds {
            north: first.latitude,
            south: first.latitude,
            east: first.longitude,
            west: first.longitude,
        };

        for photo in &photos[1..] {
            bounds.north = bounds.north.max(photo.latitude);
            bounds.south = bounds.south.min(photo.latitude);
            bounds.east = bounds.east.max(photo.longitude);
            bounds.west = bounds.west.min(photo.longitude);
        }

        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_at(id: &str, latitude: f64, longitude: f64) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            media_asset: json!({}),
            metadata: json!({
                "exif": { "gpsLatitude": latitude, "gpsLongitude": longitude }
            })
            .into(),
        }
    }

    fn record_without_gps(id: &str) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            media_asset: json!({}),
            metadata: json!({}).into(),
        }
    }

    fn geo_photo(id: &str, latitude: f64, longitude: f64) -> GeoPhoto {
        GeoPhoto {
            id: id.to_string(),
            latitude,
            longitude,
            media_asset: json!({}),
            metadata: json!({}).into(),
        }
    }

    #[test]
    fn stats_on_empty_library_are_all_zero() {
        let stats = LocationAnalyzer::new().calculate_location_stats(&[], 0);

        assert_eq!(stats.total_photos_with_location, 0);
        assert!(stats.coverage_percentage.abs() < f64::EPSILON);
        assert!(stats.average_photos_per_location.abs() < f64::EPSILON);
    }

    #[test]
    fn coverage_counts_only_geotagged_photos() {
        let photos = [
            record_at("a", 40.0, -74.0),
            record_without_gps("b"),
            record_at("c", 41.0, -75.0),
            record_without_gps("d"),
        ];

        let stats = LocationAnalyzer::new().calculate_location_stats(&photos, 0);

        assert_eq!(stats.total_photos_with_location, 2);
        assert!((stats.coverage_percentage - 50.0).abs() < f64::EPSILON);
        assert!(stats.average_photos_per_location.abs() < f64::EPSILON);
    }

    #[test]
    fn average_divides_geotagged_by_saved_locations() {
        let photos: Vec<PhotoRecord> = (0..6)
            .map(|i| record_at(&format!("p{i}"), 40.0, -74.0))
            .collect();

        let stats = LocationAnalyzer::new().calculate_location_stats(&photos, 3);

        assert!((stats.coverage_percentage - 100.0).abs() < f64::EPSILON);
        assert!((stats.average_photos_per_location - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nearby_filters_by_radius_and_keeps_order() {
        let photos = [
            record_at("here", 40.7128, -74.0060),
            record_without_gps("untagged"),
            record_at("close", 40.7173, -74.0060),
            record_at("far", 40.7308, -74.0060),
        ];

        let nearby = LocationAnalyzer::new().nearby_photos(
            40.7128,
            -74.0060,
            &photos,
            DEFAULT_NEARBY_RADIUS_METERS,
        );

        let ids: Vec<&str> = nearby.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["here", "close"]);
    }

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert_eq!(LocationAnalyzer::new().location_bounds(&[]), None);
    }

    #[test]
    fn bounds_span_the_extremes() {
        let photos = [
            geo_photo("nyc", 40.7128, -74.0060),
            geo_photo("oslo", 59.9139, 10.7522),
            geo_photo("sydney", -33.8688, 151.2093),
            geo_photo("vancouver", 49.2827, -123.1207),
        ];

        let bounds = LocationAnalyzer::new().location_bounds(&photos).unwrap();

        assert!((bounds.north - 59.9139).abs() < f64::EPSILON);
        assert!((bounds.south - -33.8688).abs() < f64::EPSILON);
        assert!((bounds.east - 151.2093).abs() < f64::EPSILON);
        assert!((bounds.west - -123.1207).abs() < f64::EPSILON);
    }

    #[test]
    fn single_photo_bounds_collapse_to_its_coordinate() {
        let photos = [geo_photo("only", 40.7128, -74.0060)];

        let bounds = LocationAnalyzer::new().location_bounds(&photos).unwrap();

        assert!((bounds.north - bounds.south).abs() < f64::EPSILON);
        assert!((bounds.east - bounds.west).abs() < f64::EPSILON);
    }
}
