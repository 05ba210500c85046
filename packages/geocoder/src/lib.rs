#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reverse geocoding for photo coordinates.
//!
//! Turns a GPS coordinate into a human-readable place label using the
//! `OpenStreetMap` Nominatim reverse endpoint. The public instance allows
//! **1 request per second**; [`nominatim::ReverseGeocoder`] paces its
//! batch operations accordingly, while single lookups leave pacing to the
//! caller.
//!
//! Place labels favor the most specific address component Nominatim
//! returns (venue over street over neighbourhood over city), and each
//! label carries a coarse [`PlaceCategory`] describing which kind of
//! component named it.

pub mod nominatim;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// A reverse-geocoded place for one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodedPlace {
    /// Human-readable place label, the most specific address component
    /// available.
    pub place_name: String,

    /// Which kind of address component produced the label.
    pub place_type: PlaceCategory,

    /// Raw Nominatim `address` object, for consumers that want the full
    /// component breakdown.
    pub address: Option<serde_json::Value>,
}

/// Coarse category of a reverse-geocoded place.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlaceCategory {
    /// Named venue (`amenity`): restaurants, cafes, schools.
    Business,
    /// Shop or store (`shop`).
    Retail,
    /// Tourist attraction (`tourism`).
    Attraction,
    /// Park or recreation area (`leisure`).
    Recreation,
    /// Named building (`building`).
    Building,
    /// Street-level address (`road`, with or without a house number).
    Address,
    /// Neighbourhood or suburb.
    Residential,
    /// Village, town, or city.
    Municipal,
    /// Anything coarser.
    Location,
}

/// Errors from reverse geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}
