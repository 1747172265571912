//! Air quality snapshot entity
//!
//! The assembled result the dashboard displays: an AQI computation for a
//! named location at a point in time, tagged with where the underlying
//! concentrations came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::{AqiResult, compute_aqi};
use crate::value_objects::{GeoLocation, PollutantReading};

/// Where a snapshot's pollutant concentrations came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Concentrations as reported by the live provider
    Live,
    /// Provider data replaced because it looked implausibly clean for a
    /// known polluted location
    RealisticOverride,
    /// Provider unavailable; concentrations fully synthesized
    Simulated,
}

impl DataSource {
    /// Human-readable source label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live provider data",
            Self::RealisticOverride => "Realistic override (provider values too low)",
            Self::Simulated => "Simulated (EPA standards)",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A computed air quality snapshot for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySnapshot {
    /// AQI computation result (overall, dominant pollutant, sub-indices)
    pub result: AqiResult,
    /// Human-readable location name
    pub location_name: String,
    /// Coordinates the snapshot was computed for
    pub location: GeoLocation,
    /// The concentrations the computation ran on
    pub reading: PollutantReading,
    /// Where the concentrations came from
    pub source: DataSource,
    /// When the snapshot was assembled
    pub observed_at: DateTime<Utc>,
}

impl AirQualitySnapshot {
    /// Assemble a snapshot by computing the AQI for a reading
    #[must_use]
    pub fn from_reading(
        reading: PollutantReading,
        location: GeoLocation,
        location_name: impl Into<String>,
        source: DataSource,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            result: compute_aqi(&reading),
            location_name: location_name.into(),
            location,
            reading,
            source,
            observed_at,
        }
    }

    /// The category band for the snapshot's overall AQI
    #[must_use]
    pub fn category(&self) -> &'static crate::aqi::AqiCategory {
        self.result.overall.category()
    }
}
