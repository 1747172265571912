//! Pollutant kinds and pollutant concentration readings
//!
//! A [`PollutantReading`] is the input to the AQI calculator: one measured
//! concentration per tracked pollutant. Readings tolerate dirty upstream
//! data; negative and non-finite values are clamped to zero at construction
//! so the calculator stays total over its domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six pollutants tracked by the AQI calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    /// Fine particulate matter (≤2.5µm)
    Pm25,
    /// Coarse particulate matter (≤10µm)
    Pm10,
    /// Nitrogen dioxide
    No2,
    /// Sulfur dioxide
    So2,
    /// Carbon monoxide
    Co,
    /// Ground-level ozone
    O3,
}

impl Pollutant {
    /// All tracked pollutants, in table order
    pub const ALL: [Self; 6] = [
        Self::Pm25,
        Self::Pm10,
        Self::No2,
        Self::So2,
        Self::Co,
        Self::O3,
    ];

    /// Short display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::No2 => "NO₂",
            Self::So2 => "SO₂",
            Self::Co => "CO",
            Self::O3 => "O₃",
        }
    }

    /// Measurement unit for this pollutant's concentration
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Co => "mg/m³",
            _ => "µg/m³",
        }
    }

    /// Longer human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pm25 => "Fine particulate matter",
            Self::Pm10 => "Coarse particulate matter",
            Self::No2 => "Nitrogen dioxide",
            Self::So2 => "Sulfur dioxide",
            Self::Co => "Carbon monoxide",
            Self::O3 => "Ground-level ozone",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of measured pollutant concentrations
///
/// CO is in mg/m³, everything else in µg/m³. Values are clamped to be
/// non-negative and finite at construction; the AQI ceiling handles the
/// upper end, so no upper bound is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
    pub o3: f64,
}

/// Clamp a raw concentration into the calculator's domain
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl PollutantReading {
    /// Create a reading, clamping negative and non-finite values to zero
    #[must_use]
    pub fn new(pm25: f64, pm10: f64, no2: f64, so2: f64, co: f64, o3: f64) -> Self {
        Self {
            pm25: sanitize(pm25),
            pm10: sanitize(pm10),
            no2: sanitize(no2),
            so2: sanitize(so2),
            co: sanitize(co),
            o3: sanitize(o3),
        }
    }

    /// A reading with every concentration at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            pm25: 0.0,
            pm10: 0.0,
            no2: 0.0,
            so2: 0.0,
            co: 0.0,
            o3: 0.0,
        }
    }

    /// Get the concentration for a pollutant
    #[must_use]
    pub const fn concentration(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
        }
    }
}

impl Default for PollutantReading {
    fn default() -> Self {
        Self::zero()
    }
}
