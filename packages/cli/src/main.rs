#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the photo location analysis tools.
//!
//! Provides subcommands for finding location hotspots, grouping photos
//! into proximity clusters, computing location coverage statistics,
//! listing photos near a point, and reporting the bounding box covered
//! by a photo library. Input is a JSON array of photo records as
//! exported by the photo backend.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use photo_map_geo::{in_valid_range, within_distance};
use photo_map_geocoder::GeocodeError;
use photo_map_geocoder::nominatim::ReverseGeocoder;
use photo_map_location::{
    DEFAULT_CLUSTER_DISTANCE_METERS, DEFAULT_MIN_HOTSPOT_PHOTOS, DEFAULT_NEARBY_RADIUS_METERS,
    LocationAnalyzer,
};
use photo_map_location_models::LocationHotspot;
use photo_map_photos_models::PhotoRecord;

/// Hotspot centers closer than this share one reverse geocoded name.
const GEOCODE_REUSE_DISTANCE_METERS: f64 = 100.0;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// Analyze where a photo library was shot.
#[derive(Parser)]
#[command(name = "photo_map_cli")]
#[command(about = "Analyze photo library locations")]
struct Cli {
    /// Path to a JSON array of photo records.
    #[arg(long)]
    input: PathBuf,

    /// Emit results as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Find frequently photographed locations.
    Hotspots {
        /// Minimum number of photos a location needs to qualify.
        #[arg(long, default_value_t = DEFAULT_MIN_HOTSPOT_PHOTOS)]
        min_photos: usize,

        /// Reverse geocode hotspot centers via Nominatim (one request
        /// per second).
        #[arg(long)]
        geocode: bool,
    },

    /// Group geotagged photos into proximity clusters.
    Clusters {
        /// Maximum distance in meters from a cluster's first photo.
        #[arg(long, default_value_t = DEFAULT_CLUSTER_DISTANCE_METERS)]
        max_distance: f64,
    },

    /// Report location coverage statistics.
    Stats {
        /// Number of named locations that already exist.
        #[arg(long, default_value_t = 0)]
        locations: usize,
    },

    /// List photos within a radius of a point.
    Nearby {
        /// Latitude of the search center in decimal degrees.
        #[arg(long)]
        lat: f64,

        /// Longitude of the search center in decimal degrees.
        #[arg(long)]
        lon: f64,

        /// Search radius in meters.
        #[arg(long, default_value_t = DEFAULT_NEARBY_RADIUS_METERS)]
        radius: f64,
    },

    /// Print the bounding box covering all geotagged photos.
    Bounds,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let photos = load_photos(&cli.input)?;
    let analyzer = LocationAnalyzer::new();

    match cli.command {
        Commands::Hotspots {
            min_photos,
            geocode,
        } => cmd_hotspots(analyzer, &photos, min_photos, geocode, cli.json).await,
        Commands::Clusters { max_distance } => {
            cmd_clusters(analyzer, &photos, max_distance, cli.json)
        }
        Commands::Stats { locations } => cmd_stats(analyzer, &photos, locations, cli.json),
        Commands::Nearby { lat, lon, radius } => {
            cmd_nearby(analyzer, &photos, lat, lon, radius, cli.json)
        }
        Commands::Bounds => cmd_bounds(analyzer, &photos, cli.json),
    }
}

/// Reads and decodes a JSON array of photo records.
fn load_photos(path: &Path) -> Result<Vec<PhotoRecord>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let photos: Vec<PhotoRecord> = serde_json::from_str(&raw)?;
    log::info!(
        "Loaded {} photo records from {}",
        photos.len(),
        path.display()
    );
    Ok(photos)
}

// ---------------------------------------------------------------------------
// Hotspots command
// ---------------------------------------------------------------------------

/// Finds hotspots and prints them, optionally replacing the heuristic
/// names with reverse geocoded place names.
async fn cmd_hotspots(
    analyzer: LocationAnalyzer,
    photos: &[PhotoRecord],
    min_photos: usize,
    geocode: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut hotspots = analyzer.find_hotspots(photos, min_photos);

    if geocode && !hotspots.is_empty() {
        geocode_hotspots(&mut hotspots).await?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hotspots)?);
        return Ok(());
    }

    if hotspots.is_empty() {
        println!("No hotspots found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<12} {:>7}  {:<32}",
        "LATITUDE", "LONGITUDE", "PHOTOS", "SUGGESTED NAME"
    );
    println!("{}", "-".repeat(67));

    for hotspot in &hotspots {
        println!(
            "{:<12.6} {:<12.6} {:>7}  {:<32}",
            hotspot.latitude,
            hotspot.longitude,
            hotspot.photo_count,
            truncate(hotspot.suggested_name.as_deref().unwrap_or("-"), 31),
        );
    }

    println!();
    println!("{} hotspot(s)", hotspots.len());

    Ok(())
}

/// Replaces heuristic hotspot names with reverse geocoded place names.
///
/// Nominatim allows one request per second, so hotspot centers within
/// `GEOCODE_REUSE_DISTANCE_METERS` of an earlier center share a single
/// lookup instead of issuing their own. Lookups that fail or resolve to
/// nothing leave the heuristic name in place.
async fn geocode_hotspots(hotspots: &mut [LocationHotspot]) -> Result<(), GeocodeError> {
    let mut centers: Vec<(f64, f64)> = Vec::new();
    let mut center_index = Vec::with_capacity(hotspots.len());

    for hotspot in &*hotspots {
        let existing = centers.iter().position(|&(lat, lon)| {
            within_distance(
                lat,
                lon,
                hotspot.latitude,
                hotspot.longitude,
                GEOCODE_REUSE_DISTANCE_METERS,
            )
        });
        let idx = existing.unwrap_or_else(|| {
            centers.push((hotspot.latitude, hotspot.longitude));
            centers.len() - 1
        });
        center_index.push(idx);
    }

    let geocoder = ReverseGeocoder::new()?;
    let places = geocoder.batch_reverse_geocode(&centers).await;

    for (hotspot, idx) in hotspots.iter_mut().zip(center_index) {
        if let Some(place) = &places[idx] {
            hotspot.suggested_name = Some(place.place_name.clone());
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Clusters command
// ---------------------------------------------------------------------------

/// Groups geotagged photos into proximity clusters and prints them.
fn cmd_clusters(
    analyzer: LocationAnalyzer,
    photos: &[PhotoRecord],
    max_distance: f64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let geotagged = analyzer.extract_coordinates(photos);
    let clusters = analyzer.cluster_photos(&geotagged, max_distance);

    if json {
        println!("{}", serde_json::to_string_pretty(&clusters)?);
        return Ok(());
    }

    if clusters.is_empty() {
        println!("No clusters found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<12} {:>7} {:>11}",
        "LATITUDE", "LONGITUDE", "PHOTOS", "RADIUS (M)"
    );
    println!("{}", "-".repeat(45));

    for cluster in &clusters {
        println!(
            "{:<12.6} {:<12.6} {:>7} {:>11.1}",
            cluster.center_latitude,
            cluster.center_longitude,
            cluster.photos.len(),
            cluster.radius,
        );
    }

    println!();
    println!("{} cluster(s)", clusters.len());

    Ok(())
}

// ---------------------------------------------------------------------------
// Stats command
// ---------------------------------------------------------------------------

/// Prints a summary of how much of the library is geotagged.
fn cmd_stats(
    analyzer: LocationAnalyzer,
    photos: &[PhotoRecord],
    locations: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = analyzer.calculate_location_stats(photos, locations);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("=== Location Coverage ===");
    println!();
    println!("Photos:              {}", photos.len());
    println!("Geotagged:           {}", stats.total_photos_with_location);
    println!("Coverage:            {:.1}%", stats.coverage_percentage);
    println!(
        "Photos per location: {:.1}",
        stats.average_photos_per_location
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// Nearby command
// ---------------------------------------------------------------------------

/// Lists photos taken within `radius` meters of a point.
fn cmd_nearby(
    analyzer: LocationAnalyzer,
    photos: &[PhotoRecord],
    lat: f64,
    lon: f64,
    radius: f64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !in_valid_range(lat, lon) {
        return Err(format!("Search center ({lat}, {lon}) is out of range").into());
    }

    let nearby = analyzer.nearby_photos(lat, lon, photos, radius);

    if json {
        println!("{}", serde_json::to_string_pretty(&nearby)?);
        return Ok(());
    }

    if nearby.is_empty() {
        println!("No photos within {radius:.0} m.");
        return Ok(());
    }

    println!("{:<36} {:<12} {:<12}", "PHOTO ID", "LATITUDE", "LONGITUDE");
    println!("{}", "-".repeat(62));

    for photo in &nearby {
        println!(
            "{:<36} {:<12.6} {:<12.6}",
            truncate(&photo.id, 35),
            photo.latitude,
            photo.longitude,
        );
    }

    println!();
    println!("{} photo(s) within {radius:.0} m", nearby.len());

    Ok(())
}

// ---------------------------------------------------------------------------
// Bounds command
// ---------------------------------------------------------------------------

/// Prints the bounding box covering every geotagged photo.
fn cmd_bounds(
    analyzer: LocationAnalyzer,
    photos: &[PhotoRecord],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let geotagged = analyzer.extract_coordinates(photos);
    let bounds = analyzer.location_bounds(&geotagged);

    if json {
        println!("{}", serde_json::to_string_pretty(&bounds)?);
        return Ok(());
    }

    let Some(bounds) = bounds else {
        println!("No geotagged photos.");
        return Ok(());
    };

    println!("North: {:.6}", bounds.north);
    println!("South: {:.6}", bounds.south);
    println!("East:  {:.6}", bounds.east);
    println!("West:  {:.6}", bounds.west);

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Truncates a string to `max_chars` characters, appending "…" if it was
/// longer than the limit. Counts characters rather than bytes so that
/// non-ASCII place names never split mid-character.
#[must_use]
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let mut result: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        result.push('…');
        result
    }
}
