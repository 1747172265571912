//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap `data/2.5` API (<https://openweathermap.org/api>):
//! current weather, air pollution components, and the 5-day/3-hour forecast.
//! Requires an API key.

pub mod client;
mod models;

pub use client::{AirDataClient, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
pub use models::{AirSample, ConditionGroup, CurrentConditions, ForecastStep};
