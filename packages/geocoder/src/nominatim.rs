//! Nominatim / `OpenStreetMap` reverse geocoding client.
//!
//! Nominatim's public instance has strict rate limits: **1 request per
//! second** maximum, and a meaningful `User-Agent` is required.
//!
//! See <https://nominatim.org/release-docs/develop/api/Reverse/>

use crate::{GeocodeError, PlaceCategory, ReverseGeocodedPlace};

/// Public Nominatim instance.
const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Delay between consecutive requests in batch operations, per the
/// Nominatim usage policy.
const REQUEST_DELAY_MS: u64 = 1000;

/// How long to back off after Nominatim reports a rate-limit hit.
const RATE_LIMIT_BACKOFF_SECS: u64 = 60;

/// Reverse geocoding client for a Nominatim instance.
///
/// Single lookups are not paced; callers issuing several in a row should
/// either space them a second apart or go through
/// [`batch_reverse_geocode`](Self::batch_reverse_geocode), which sleeps
/// between requests.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl ReverseGeocoder {
    /// Creates a client against the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(NOMINATIM_BASE_URL)
    }

    /// Creates a client against a specific Nominatim instance, e.g. a
    /// self-hosted one without the public rate limits.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent("photo-map/0.1 (reverse geocoding)")
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Converts a coordinate to a place label.
    ///
    /// Returns `Ok(None)` when the coordinate is out of range, when
    /// Nominatim has nothing for it (open water, for instance), or when
    /// the response carries no usable name — only transport-level
    /// problems surface as errors.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::RateLimited`] on HTTP 429 and
    /// [`GeocodeError::Http`] when the request itself fails.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<ReverseGeocodedPlace>, GeocodeError> {
        if !photo_map_geo::in_valid_range(latitude, longitude) {
            return Ok(None);
        }

        let lat = latitude.to_string();
        let lon = longitude.to_string();

        let resp = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                // High detail: building-level results where available.
                ("zoom", "18"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !resp.status().is_success() {
            log::warn!(
                "Reverse geocoding returned {} for ({latitude}, {longitude})",
                resp.status()
            );
            return Ok(None);
        }

        let body: serde_json::Value = resp.json().await?;
        Ok(parse_response(&body))
    }

    /// Reverse geocodes a list of coordinates in order, sleeping between
    /// requests to respect the usage policy.
    ///
    /// Per-coordinate failures degrade to `None` in the corresponding
    /// output slot rather than aborting the batch; a rate-limit hit
    /// additionally backs off for a minute before moving on.
    pub async fn batch_reverse_geocode(
        &self,
        coordinates: &[(f64, f64)],
    ) -> Vec<Option<ReverseGeocodedPlace>> {
        let mut results = Vec::with_capacity(coordinates.len());

        for (i, &(latitude, longitude)) in coordinates.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(REQUEST_DELAY_MS)).await;
            }

            match self.reverse_geocode(latitude, longitude).await {
                Ok(place) => results.push(place),
                Err(e) => {
                    log::warn!("Reverse geocoding failed for ({latitude}, {longitude}): {e}");
                    if matches!(e, GeocodeError::RateLimited) {
                        log::warn!(
                            "Rate limited by Nominatim, waiting {RATE_LIMIT_BACKOFF_SECS}s..."
                        );
                        tokio::time::sleep(std::time::Duration::from_secs(RATE_LIMIT_BACKOFF_SECS))
                            .await;
                    }
                    results.push(None);
                }
            }
        }

        results
    }

    /// Produces a location label for a coordinate, geocoding only when the
    /// existing label is missing or insufficient.
    ///
    /// An existing label is kept when it carries real detail (longer than
    /// ten characters and not just digits and punctuation). Otherwise the
    /// coordinate is reverse geocoded; if that yields nothing, the
    /// existing label is returned as-is, or a `"lat, lon"` string when
    /// there is none. Never fails — geocoding errors are logged and fall
    /// through to the fallback.
    pub async fn geocode_if_needed(
        &self,
        latitude: f64,
        longitude: f64,
        existing_location: Option<&str>,
    ) -> String {
        if let Some(existing) = existing_location
            && has_sufficient_detail(existing)
        {
            return existing.to_string();
        }

        match self.reverse_geocode(latitude, longitude).await {
            Ok(Some(place)) => place.place_name,
            Ok(None) => fallback_label(latitude, longitude, existing_location),
            Err(e) => {
                log::warn!("Reverse geocoding failed for ({latitude}, {longitude}): {e}");
                fallback_label(latitude, longitude, existing_location)
            }
        }
    }
}

/// Whether an existing location label is detailed enough to skip
/// geocoding: longer than ten characters once trimmed, and not purely
/// digits once `.`/`-`/`,`/spaces are removed (a bare coordinate string
/// does not count as detail).
fn has_sufficient_detail(label: &str) -> bool {
    if label.trim().chars().count() <= 10 {
        return false;
    }

    let stripped: String = label
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | ',' | ' '))
        .collect();

    stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit())
}

fn fallback_label(latitude: f64, longitude: f64, existing_location: Option<&str>) -> String {
    existing_location
        .filter(|s| !s.is_empty())
        .map_or_else(|| coordinate_label(latitude, longitude), str::to_string)
}

/// Plain `"lat, lon"` label used when nothing better is available.
#[must_use]
pub fn coordinate_label(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.6}, {longitude:.6}")
}

/// Parses a Nominatim reverse response into a place, or `None` when the
/// payload has no usable name (error payloads included).
fn parse_response(body: &serde_json::Value) -> Option<ReverseGeocodedPlace> {
    let display_name = body
        .get("display_name")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())?;

    let address = body.get("address");

    let place_name = address
        .and_then(extract_place_name)
        .unwrap_or_else(|| display_name.to_string());
    let place_type = address.map_or(PlaceCategory::Location, determine_place_type);

    Some(ReverseGeocodedPlace {
        place_name,
        place_type,
        address: address.cloned(),
    })
}

/// Picks the most specific named component of a Nominatim `address`
/// object, in fixed priority order: venue-like components first, then the
/// street address, then increasingly coarse area names.
fn extract_place_name(address: &serde_json::Value) -> Option<String> {
    let component = |key: &str| {
        address
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    component("amenity")
        .or_else(|| component("shop"))
        .or_else(|| component("tourism"))
        .or_else(|| component("leisure"))
        .or_else(|| component("building"))
        .or_else(|| street_address(address))
        .or_else(|| component("road"))
        .or_else(|| component("neighbourhood"))
        .or_else(|| component("suburb"))
        .or_else(|| component("village"))
        .or_else(|| component("town"))
        .or_else(|| component("city"))
        .or_else(|| component("county"))
}

/// Combines house number and road into a street address, when both are
/// present.
fn street_address(address: &serde_json::Value) -> Option<String> {
    let house_number = address
        .get("house_number")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())?;
    let road = address
        .get("road")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())?;

    Some(format!("{house_number} {road}"))
}

/// Categorizes an address by its most specific present component.
fn determine_place_type(address: &serde_json::Value) -> PlaceCategory {
    let has = |key: &str| {
        address
            .get(key)
            .and_then(serde_json::Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };

    if has("amenity") {
        PlaceCategory::Business
    } else if has("shop") {
        PlaceCategory::Retail
    } else if has("tourism") {
        PlaceCategory::Attraction
    } else if has("leisure") {
        PlaceCategory::Recreation
    } else if has("building") {
        PlaceCategory::Building
    } else if has("road") {
        PlaceCategory::Address
    } else if has("neighbourhood") || has("suburb") {
        PlaceCategory::Residential
    } else if has("village") || has("town") || has("city") {
        PlaceCategory::Municipal
    } else {
        PlaceCategory::Location
    }
}
