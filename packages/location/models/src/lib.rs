#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result records produced by the location analysis engine.
//!
//! All of these are transient in-memory values: built fresh per analysis
//! call, handed to presentation layers as-is (`camelCase` JSON), and never
//! persisted. None of them has identity beyond the photo ids they carry.

use photo_map_photos_models::PhotoMetadata;
use serde::{Deserialize, Serialize};

/// A photo whose GPS coordinate was successfully resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPhoto {
    /// Backend photo identifier.
    pub id: String,

    /// Resolved latitude in degrees.
    pub latitude: f64,

    /// Resolved longitude in degrees.
    pub longitude: f64,

    /// Opaque media asset payload carried through for presentation.
    pub media_asset: serde_json::Value,

    /// The photo's metadata document; hotspot naming reads place names
    /// and detected events from it.
    pub metadata: PhotoMetadata,
}

/// A spatial cluster of geotagged photos.
///
/// Members are guaranteed within `radius` meters of the cluster's *seed*
/// photo, not of `center` or of each other; see the clustering contract in
/// `photo_map_location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCluster {
    /// Unweighted mean latitude of all members.
    pub center_latitude: f64,

    /// Unweighted mean longitude of all members.
    pub center_longitude: f64,

    /// Member photos in the order they joined, seed first.
    pub photos: Vec<GeoPhoto>,

    /// The distance threshold the cluster was built with, in meters. Not
    /// a measured extent.
    pub radius: f64,
}

/// A densely photographed place, derived from a [`LocationCluster`] that
/// passed the hotspot population threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationHotspot {
    /// Cluster center latitude.
    pub latitude: f64,

    /// Cluster center longitude.
    pub longitude: f64,

    /// Number of member photos.
    pub photo_count: usize,

    /// Denormalized member copies for presentation, decoupled from the
    /// cluster's own representation.
    pub photos: Vec<HotspotPhoto>,

    /// Best-effort human-readable name for the place, when one could be
    /// derived from member metadata or cluster size.
    pub suggested_name: Option<String>,
}

/// Presentation copy of a hotspot member photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotPhoto {
    /// Backend photo identifier.
    pub id: String,

    /// Opaque media asset payload.
    pub media_asset: serde_json::Value,

    /// The photo's metadata document.
    pub metadata: PhotoMetadata,
}

impl From<GeoPhoto> for HotspotPhoto {
    fn from(photo: GeoPhoto) -> Self {
        Self {
            id: photo.id,
            media_asset: photo.media_asset,
            metadata: photo.metadata,
        }
    }
}

/// Aggregate geotag coverage statistics over a photo library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    /// Photos for which a coordinate could be resolved.
    pub total_photos_with_location: usize,

    /// Geotagged share of the whole library, in percent. `0.0` for an
    /// empty library.
    pub coverage_percentage: f64,

    /// Geotagged photos per saved location. `0.0` when no locations
    /// exist.
    pub average_photos_per_location: f64,
}

/// Axis-aligned bounding box over a set of coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBounds {
    /// Maximum latitude.
    pub north: f64,

    /// Minimum latitude.
    pub south: f64,

    /// Maximum longitude.
    pub east: f64,

    /// Minimum longitude.
    pub west: f64,
}
