//! Adapters implementing application ports over the integration clients

mod air_quality_adapter;
mod geocoding_adapter;
mod weather_adapter;

pub use air_quality_adapter::AirQualityAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use weather_adapter::WeatherAdapter;
