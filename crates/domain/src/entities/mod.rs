//! Domain entities

mod air_quality_snapshot;
mod health_advice;

pub use air_quality_snapshot::{AirQualitySnapshot, DataSource};
pub use health_advice::HealthAdvice;
