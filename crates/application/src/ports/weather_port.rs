//! Weather provider port
//!
//! Defines the interface for current conditions and short forecasts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Weather conditions as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky
    Clear,
    /// Cloud cover
    Clouds,
    /// Rain
    Rain,
    /// Drizzle
    Drizzle,
    /// Thunderstorm
    Thunderstorm,
    /// Snow
    Snow,
    /// Mist, fog, haze and similar obscurations
    Atmosphere,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Get a human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::Clouds => "Cloudy",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Atmosphere => "Mist or haze",
            Self::Unknown => "Unknown",
        }
    }

    /// Map a provider condition group name to a condition
    #[must_use]
    pub fn from_provider_group(group: &str) -> Self {
        match group {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash" | "Squall" | "Tornado" => {
                Self::Atmosphere
            },
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent/feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Surface pressure in hPa
    pub pressure: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// Visibility in meters, when reported
    pub visibility: Option<f64>,
    /// Condition group
    pub condition: WeatherCondition,
    /// Provider's free-text description ("light rain")
    pub description: String,
    /// When this data was observed
    pub observed_at: DateTime<Utc>,
}

/// One forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast valid time
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Condition group
    pub condition: WeatherCondition,
    /// Provider's free-text description
    pub description: String,
}

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a location
    async fn get_current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Get the short-term forecast for a location
    async fn get_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastEntry>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
