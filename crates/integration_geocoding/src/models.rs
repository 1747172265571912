//! TomTom Search data models

use serde::{Deserialize, Serialize};

/// A parsed location match from a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceMatch {
    /// Display name (municipality preferred, free-form address otherwise)
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

// ---- Raw API responses ----

#[derive(Debug, Clone, Deserialize)]
pub struct RawAddress {
    #[serde(default, rename = "freeformAddress")]
    pub freeform_address: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
}

impl RawAddress {
    /// Preferred display name: municipality, then free-form address
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.municipality
            .clone()
            .or_else(|| self.freeform_address.clone())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReverseEntry {
    pub address: RawAddress,
}

/// Raw reverse geocode response
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub addresses: Vec<RawReverseEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawPosition {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResult {
    pub position: RawPosition,
    pub address: RawAddress,
}

/// Raw fuzzy search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawSearchResult>,
}
