//! HTTP request handlers

pub mod air_quality;
pub mod health;
pub mod locations;
pub mod weather;

use axum::extract::Query;
use domain::value_objects::GeoLocation;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Coordinate query parameters shared by the location-scoped endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordsQuery {
    /// Latitude (-90 to 90)
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude (-180 to 180)
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Resolve the request coordinates, falling back to the configured default
///
/// # Errors
///
/// Returns a bad request when coordinates are absent (and no default is
/// configured) or out of range.
pub(crate) fn resolve_location(
    state: &AppState,
    query: Query<CoordsQuery>,
) -> Result<GeoLocation, ApiError> {
    match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => GeoLocation::new(latitude, longitude)
            .map_err(|e| ApiError::BadRequest(e.to_string())),
        (None, None) => state
            .config
            .air_quality
            .default_location
            .as_ref()
            .and_then(infrastructure::GeoLocationConfig::to_geo_location)
            .ok_or_else(|| {
                ApiError::BadRequest(
                    "latitude and longitude query parameters are required".to_string(),
                )
            }),
        _ => Err(ApiError::BadRequest(
            "latitude and longitude must be provided together".to_string(),
        )),
    }
}
