//! Port definitions for external data providers

mod air_quality_port;
mod geocoding_port;
mod weather_port;

pub use air_quality_port::AirQualityPort;
pub use geocoding_port::{GeocodingPort, LocationMatch};
pub use weather_port::{CurrentWeather, ForecastEntry, WeatherCondition, WeatherPort};

#[cfg(test)]
pub use air_quality_port::MockAirQualityPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
