//! OpenWeatherMap data models
//!
//! Raw response types mirror the provider's JSON; parsed types are what the
//! client hands to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider condition group ("Clear", "Clouds", "Rain", ...)
///
/// Kept as the provider's string plus description; mapping to the
/// application's condition taxonomy happens in the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGroup {
    /// Group name, e.g. "Clouds"
    pub main: String,
    /// Free-text detail, e.g. "scattered clouds"
    pub description: String,
}

/// Parsed current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time
    pub observed_at: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Pressure in hPa
    pub pressure: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// Visibility in meters, when reported
    pub visibility: Option<f64>,
    /// Weather condition
    pub condition: ConditionGroup,
}

/// Parsed air pollution components
///
/// All concentrations in µg/m³ as the provider reports them (including CO).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirSample {
    /// Observation time
    pub observed_at: DateTime<Utc>,
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
    pub o3: f64,
}

/// One parsed forecast step (3-hour resolution)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastStep {
    /// Forecast valid time
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Weather condition
    pub condition: ConditionGroup,
}

// ---- Raw API responses ----

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    pub speed: f64,
    #[serde(default)]
    pub deg: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub main: String,
    pub description: String,
}

/// Raw `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub dt: i64,
    pub main: RawMain,
    pub wind: RawWind,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawComponents {
    #[serde(default)]
    pub co: f64,
    #[serde(default)]
    pub no2: f64,
    #[serde(default)]
    pub o3: f64,
    #[serde(default)]
    pub so2: f64,
    #[serde(default)]
    pub pm2_5: f64,
    #[serde(default)]
    pub pm10: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawAirEntry {
    pub dt: i64,
    pub components: RawComponents,
}

/// Raw `/air_pollution` response
#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<RawAirEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastItem {
    pub dt: i64,
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
}

/// Raw `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<RawForecastItem>,
}
