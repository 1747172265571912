//! Air quality snapshot handler

use axum::{Json, extract::{Query, State}};
use chrono::{DateTime, Utc};
use domain::aqi::SubIndices;
use domain::entities::{DataSource, HealthAdvice};
use domain::value_objects::{GeoLocation, PollutantReading};
use serde::Serialize;
use tracing::instrument;

use application::AirQualityService;

use crate::error::ApiError;
use crate::state::AppState;

use super::{CoordsQuery, resolve_location};

/// Category band in responses
#[derive(Debug, Serialize)]
pub struct CategoryData {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Health advice in responses
#[derive(Debug, Serialize)]
pub struct AdviceData {
    pub headline: &'static str,
    pub activities: &'static [&'static str],
    pub sensitive_groups: &'static [&'static str],
}

/// Coordinates in responses
#[derive(Debug, Serialize)]
pub struct CoordinatesData {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoLocation> for CoordinatesData {
    fn from(loc: GeoLocation) -> Self {
        Self {
            latitude: loc.latitude(),
            longitude: loc.longitude(),
        }
    }
}

/// Air quality snapshot response
#[derive(Debug, Serialize)]
pub struct AirQualityResponse {
    /// Overall AQI (0-500)
    pub aqi: u16,
    /// Category band for the overall AQI
    pub category: CategoryData,
    /// Pollutant that produced the overall value
    pub dominant_pollutant: String,
    /// Per-pollutant sub-indices
    pub sub_indices: SubIndices,
    /// The concentrations the computation ran on
    pub pollutants: PollutantReading,
    /// Display name of the location
    pub location_name: String,
    /// Coordinates of the snapshot
    pub coordinates: CoordinatesData,
    /// Where the concentrations came from
    pub source: DataSource,
    /// Human-readable source label
    pub source_label: &'static str,
    /// Health advice for the category
    pub advice: AdviceData,
    /// When the snapshot was assembled
    pub observed_at: DateTime<Utc>,
}

/// GET /v1/air-quality?latitude=..&longitude=..
#[instrument(skip(state, query))]
pub async fn get_snapshot(
    State(state): State<AppState>,
    query: Query<CoordsQuery>,
) -> Result<Json<AirQualityResponse>, ApiError> {
    let location = resolve_location(&state, query)?;
    let snapshot = state.air_quality.snapshot(&location).await?;

    let category = snapshot.category();
    let advice: HealthAdvice = AirQualityService::advice(&snapshot);

    Ok(Json(AirQualityResponse {
        aqi: snapshot.result.overall.value(),
        category: CategoryData {
            label: category.label,
            color: category.color,
            description: category.description,
        },
        dominant_pollutant: snapshot.result.dominant.name().to_string(),
        sub_indices: snapshot.result.sub_indices,
        pollutants: snapshot.reading,
        location_name: snapshot.location_name.clone(),
        coordinates: snapshot.location.into(),
        source: snapshot.source,
        source_label: snapshot.source.label(),
        advice: AdviceData {
            headline: advice.headline,
            activities: advice.activities,
            sensitive_groups: advice.sensitive_groups,
        },
        observed_at: snapshot.observed_at,
    }))
}
