#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Photo record types as supplied by the photo management backend.
//!
//! The backend hands this workspace an ordered list of photo records whose
//! `metadata` field is a free-form JSON document written by several
//! producers (EXIF import, AI enrichment). [`PhotoMetadata`] wraps that
//! document and exposes only the handful of optional fields the location
//! pipeline reads, so the rest of the workspace never touches the raw
//! schema. A field that is missing, empty, or of the wrong type reads as
//! absent; nothing in here fails.

use serde::{Deserialize, Serialize};

/// A photo record as exported by the photo management backend.
///
/// Only `id` is interpreted by this workspace; `media_asset` is carried
/// opaquely for presentation layers and `metadata` is read through the
/// [`PhotoMetadata`] accessors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Backend identifier for the photo. Defaults to empty when the
    /// exporting layer omits it.
    #[serde(default)]
    pub id: String,

    /// Opaque media asset payload (paths, variants, mime types). Never
    /// inspected here.
    #[serde(default)]
    pub media_asset: serde_json::Value,

    /// Free-form metadata document, see [`PhotoMetadata`].
    #[serde(default)]
    pub metadata: PhotoMetadata,
}

/// Read-only view over a photo's raw metadata document.
///
/// Producers write `camelCase` keys: AI enrichment under `ai`
/// (`gpsCoordinates`, `placeName`, `detectedEvents`) and the EXIF importer
/// under `exif` (`gpsLatitude`, `gpsLongitude`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoMetadata(serde_json::Value);

impl PhotoMetadata {
    /// AI-derived GPS pair from `ai.gpsCoordinates`, if both components
    /// are present and numeric. No value-level screening happens here;
    /// the extractor owns the zero-sentinel policy.
    #[must_use]
    pub fn ai_gps(&self) -> Option<(f64, f64)> {
        let coords = self.0.get("ai")?.get("gpsCoordinates")?;
        let latitude = coords.get("latitude").and_then(serde_json::Value::as_f64)?;
        let longitude = coords
            .get("longitude")
            .and_then(serde_json::Value::as_f64)?;
        Some((latitude, longitude))
    }

    /// EXIF-derived GPS pair from `exif.gpsLatitude`/`exif.gpsLongitude`,
    /// if both components are present and numeric.
    #[must_use]
    pub fn exif_gps(&self) -> Option<(f64, f64)> {
        let exif = self.0.get("exif")?;
        let latitude = exif.get("gpsLatitude").and_then(serde_json::Value::as_f64)?;
        let longitude = exif
            .get("gpsLongitude")
            .and_then(serde_json::Value::as_f64)?;
        Some((latitude, longitude))
    }

    /// AI-derived place name from `ai.placeName`, skipping empty strings.
    #[must_use]
    pub fn ai_place_name(&self) -> Option<&str> {
        self.0
            .get("ai")?
            .get("placeName")
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Type of the first AI-detected event, from
    /// `ai.detectedEvents[0].eventType`, skipping empty strings.
    #[must_use]
    pub fn first_event_type(&self) -> Option<&str> {
        self.0
            .get("ai")?
            .get("detectedEvents")
            .and_then(serde_json::Value::as_array)?
            .first()?
            .get("eventType")
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The underlying raw document.
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for PhotoMetadata {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ai_gps_reads_nested_coordinates() {
        let meta = PhotoMetadata::from(json!({
            "ai": { "gpsCoordinates": { "latitude": 40.7128, "longitude": -74.0060 } }
        }));
        let (lat, lon) = meta.ai_gps().unwrap();
        assert!((lat - 40.7128).abs() < f64::EPSILON);
        assert!((lon - -74.0060).abs() < f64::EPSILON);
    }

    #[test]
    fn ai_gps_requires_both_components() {
        let meta = PhotoMetadata::from(json!({
            "ai": { "gpsCoordinates": { "latitude": 40.7128 } }
        }));
        assert_eq!(meta.ai_gps(), None);
    }

    #[test]
    fn ai_gps_ignores_non_numeric_values() {
        let meta = PhotoMetadata::from(json!({
            "ai": { "gpsCoordinates": { "latitude": "40.7128", "longitude": -74.0060 } }
        }));
        assert_eq!(meta.ai_gps(), None);
    }

    #[test]
    fn exif_gps_reads_flat_fields() {
        let meta = PhotoMetadata::from(json!({
            "exif": { "gpsLatitude": 40.75, "gpsLongitude": -73.98, "camera": "X100V" }
        }));
        assert_eq!(meta.exif_gps(), Some((40.75, -73.98)));
    }

    #[test]
    fn exif_gps_requires_both_components() {
        let meta = PhotoMetadata::from(json!({
            "exif": { "gpsLatitude": 40.75 }
        }));
        assert_eq!(meta.exif_gps(), None);
    }

    #[test]
    fn place_name_skips_empty_strings() {
        let named = PhotoMetadata::from(json!({ "ai": { "placeName": "Central Park" } }));
        let empty = PhotoMetadata::from(json!({ "ai": { "placeName": "" } }));
        assert_eq!(named.ai_place_name(), Some("Central Park"));
        assert_eq!(empty.ai_place_name(), None);
    }

    #[test]
    fn first_event_type_reads_first_entry_only() {
        let meta = PhotoMetadata::from(json!({
            "ai": { "detectedEvents": [
                { "eventType": "Birthday", "confidence": 0.9 },
                { "eventType": "Concert" },
            ] }
        }));
        assert_eq!(meta.first_event_type(), Some("Birthday"));
    }

    #[test]
    fn first_event_type_absent_for_empty_or_untyped_events() {
        let empty = PhotoMetadata::from(json!({ "ai": { "detectedEvents": [] } }));
        let untyped =
            PhotoMetadata::from(json!({ "ai": { "detectedEvents": [{ "confidence": 0.4 }] } }));
        let blank =
            PhotoMetadata::from(json!({ "ai": { "detectedEvents": [{ "eventType": "" }] } }));
        assert_eq!(empty.first_event_type(), None);
        assert_eq!(untyped.first_event_type(), None);
        assert_eq!(blank.first_event_type(), None);
    }

    #[test]
    fn accessors_tolerate_arbitrary_shapes() {
        let not_an_object = PhotoMetadata::from(json!("free text"));
        assert_eq!(not_an_object.ai_gps(), None);
        assert_eq!(not_an_object.exif_gps(), None);
        assert_eq!(not_an_object.ai_place_name(), None);
        assert_eq!(not_an_object.first_event_type(), None);

        let wrong_types = PhotoMetadata::from(json!({ "ai": 3, "exif": [1, 2] }));
        assert_eq!(wrong_types.ai_gps(), None);
        assert_eq!(wrong_types.exif_gps(), None);
    }

    #[test]
    fn photo_record_deserializes_backend_export() {
        let record: PhotoRecord = serde_json::from_value(json!({
            "id": "photo-1",
            "mediaAsset": { "path": "/photos/1.jpg" },
            "metadata": {
                "exif": { "gpsLatitude": 40.75, "gpsLongitude": -73.98 }
            }
        }))
        .unwrap();
        assert_eq!(record.id, "photo-1");
        assert_eq!(record.metadata.exif_gps(), Some((40.75, -73.98)));
    }

    #[test]
    fn photo_record_defaults_missing_fields() {
        let record: PhotoRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.metadata.ai_gps(), None);
    }
}
