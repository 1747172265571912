//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the
//! provider integration crates, and owns configuration and telemetry.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{AirQualityAdapter, GeocodingAdapter, WeatherAdapter};
pub use config::{
    AirQualityAppConfig, AppConfig, Environment, GeoLocationConfig, GeocodingAppConfig,
    OpenWeatherAppConfig, ServerConfig,
};
pub use telemetry::{TelemetryConfig, init_telemetry};
