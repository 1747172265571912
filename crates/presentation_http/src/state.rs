//! Application state shared across handlers

use std::sync::Arc;

use application::ports::GeocodingPort;
use application::{AirQualityService, WeatherService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Air quality snapshot service
    pub air_quality: Arc<AirQualityService>,
    /// Weather report service
    pub weather: Arc<WeatherService>,
    /// Geocoding provider for the location endpoints
    pub geocoding: Arc<dyn GeocodingPort>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("air_quality", &self.air_quality)
            .field("weather", &self.weather)
            .field("geocoding", &"<GeocodingPort>")
            .finish_non_exhaustive()
    }
}
