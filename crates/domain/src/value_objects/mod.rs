//! Value objects for the air quality domain

mod aqi_value;
mod geo_location;
mod pollutant;

pub use aqi_value::Aqi;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use pollutant::{Pollutant, PollutantReading};
