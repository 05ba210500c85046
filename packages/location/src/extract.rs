//! Coordinate resolution from photo metadata.
//!
//! Two producers can geotag a photo: AI enrichment (`ai.gpsCoordinates`)
//! and the EXIF importer (`exif.gpsLatitude`/`gpsLongitude`). The AI
//! source writes `0` for components it could not determine, so an AI pair
//! is only trusted when both components are nonzero; as a consequence,
//! genuine equatorial or prime-meridian coordinates can never arrive via
//! the AI source. This is a known limitation of the producers' sentinel,
//! kept as-is because downstream consumers rely on today's behavior.

use photo_map_location_models::GeoPhoto;
use photo_map_photos_models::PhotoRecord;

use crate::LocationAnalyzer;

impl LocationAnalyzer {
    /// Resolves a GPS coordinate for every photo that carries one,
    /// preserving input order.
    ///
    /// Resolution policy, first match wins with no merging:
    /// 1. the AI pair, when both components are present and nonzero;
    /// 2. the EXIF pair, when both components are present.
    ///
    /// The winning pair must then pass
    /// [`photo_map_geo::is_valid_coordinate`] (not NaN, neither component
    /// zero, within range); there is no second chance for the other source
    /// once a pair was picked. Photos without a usable coordinate are
    /// dropped silently — only the summary log line accounts for them.
    #[must_use]
    pub fn extract_coordinates(&self, photos: &[PhotoRecord]) -> Vec<GeoPhoto> {
        let geotagged: Vec<GeoPhoto> = photos.iter().filter_map(resolve_photo).collect();

        log::info!(
            "Extracted coordinates from {} of {} photos",
            geotagged.len(),
            photos.len()
        );

        geotagged
    }
}

fn resolve_photo(photo: &PhotoRecord) -> Option<GeoPhoto> {
    let (latitude, longitude) = photo
        .metadata
        .ai_gps()
        .filter(|&(lat, lon)| lat != 0.0 && lon != 0.0)
        .or_else(|| photo.metadata.exif_gps())?;

    if !photo_map_geo::is_valid_coordinate(latitude, longitude) {
        return None;
    }

    Some(GeoPhoto {
        id: photo.id.clone(),
        latitude,
        longitude,
        media_asset: photo.media_asset.clone(),
        metadata: photo.metadata.clone(),
    })
}
