//! TomTom Search geocoding integration
//!
//! Client for the TomTom Search API (<https://developer.tomtom.com/search-api>):
//! reverse geocoding for display names and fuzzy search for the location
//! selector. Requires an API key.

pub mod client;
mod models;

pub use client::{GeocodingClient, TomTomClient, TomTomConfig, TomTomError};
pub use models::PlaceMatch;
