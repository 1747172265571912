//! Air pollution provider port
//!
//! Defines the interface for retrieving live pollutant concentrations.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PollutantReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for live pollutant concentration retrieval
///
/// Implementations return concentrations in the units the domain expects:
/// CO in mg/m³, everything else in µg/m³. Providers may fail or return
/// implausible data; plausibility handling is the caller's concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Fetch the current pollutant concentrations for a location
    async fn fetch_reading(
        &self,
        location: &GeoLocation,
    ) -> Result<PollutantReading, ApplicationError>;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;
}
