//! Weather handlers

use axum::{Json, extract::{Query, State}};
use application::ports::{CurrentWeather, ForecastEntry};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

use super::{CoordsQuery, resolve_location};

/// Current weather response
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    #[serde(flatten)]
    pub current: CurrentWeather,
    /// Condition description for display
    pub condition_label: &'static str,
}

/// Forecast response
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub entries: Vec<ForecastEntry>,
}

/// GET /v1/weather?latitude=..&longitude=..
#[instrument(skip(state, query))]
pub async fn get_current(
    State(state): State<AppState>,
    query: Query<CoordsQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let location = resolve_location(&state, query)?;
    let current = state.weather.current(&location).await?;
    let condition_label = current.condition.description();

    Ok(Json(WeatherResponse {
        current,
        condition_label,
    }))
}

/// GET /v1/weather/forecast?latitude=..&longitude=..
#[instrument(skip(state, query))]
pub async fn get_forecast(
    State(state): State<AppState>,
    query: Query<CoordsQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let location = resolve_location(&state, query)?;
    let entries = state.weather.forecast(&location).await?;

    Ok(Json(ForecastResponse { entries }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::ports::WeatherCondition;
    use chrono::Utc;

    #[test]
    fn weather_response_flattens_current_conditions() {
        let response = WeatherResponse {
            current: CurrentWeather {
                temperature: 18.4,
                feels_like: 17.9,
                humidity: 58,
                pressure: 1019.0,
                wind_speed: 3.6,
                wind_direction: 250,
                visibility: Some(10_000.0),
                condition: WeatherCondition::Clouds,
                description: "few clouds".to_string(),
                observed_at: Utc::now(),
            },
            condition_label: WeatherCondition::Clouds.description(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["temperature"], 18.4);
        assert_eq!(json["condition"], "clouds");
        assert_eq!(json["condition_label"], "Cloudy");
    }
}
