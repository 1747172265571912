//! Per-pollutant interpolation and overall AQI aggregation

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::value_objects::{Aqi, Pollutant, PollutantReading};

use super::breakpoints::{self, AQI_CEILING};

/// Compute the sub-index for one pollutant concentration
///
/// Linear interpolation within the matching breakpoint row:
/// `I = ((I_hi - I_lo) / (C_hi - C_lo)) * (C - C_lo) + I_lo`, rounded
/// half-away-from-zero. Concentrations beyond the last row report the
/// EPA ceiling. Concentrations in the gap between two published rows snap
/// to the next row's floor, which keeps the function monotone.
#[must_use]
pub fn sub_index(pollutant: Pollutant, concentration: f64) -> Aqi {
    // Out-of-domain inputs (negative, NaN) are treated as zero
    let c = if concentration.is_finite() {
        concentration.max(0.0)
    } else {
        0.0
    };

    for row in breakpoints::table(pollutant) {
        let (c_lo, c_hi) = row.concentration;
        if c <= c_hi {
            let c = c.max(c_lo);
            let (a_lo, a_hi) = row.aqi;
            let aqi = (f64::from(a_hi - a_lo) / (c_hi - c_lo)).mul_add(c - c_lo, f64::from(a_lo));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            return Aqi::clamped(aqi.round() as u16);
        }
    }

    Aqi::clamped(AQI_CEILING)
}

/// Sub-indices for all six pollutants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubIndices {
    pub pm25: Aqi,
    pub pm10: Aqi,
    pub no2: Aqi,
    pub so2: Aqi,
    pub co: Aqi,
    pub o3: Aqi,
}

impl SubIndices {
    /// Get the sub-index for a pollutant
    #[must_use]
    pub const fn get(&self, pollutant: Pollutant) -> Aqi {
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

/// Result of an overall AQI computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiResult {
    /// Overall AQI: the maximum of the six sub-indices
    pub overall: Aqi,
    /// The pollutant that produced the overall value
    pub dominant: Pollutant,
    /// All six per-pollutant sub-indices for diagnostic display
    pub sub_indices: SubIndices,
}

/// Compute the overall AQI for a pollutant reading
///
/// Per the EPA convention the reported AQI is the worst individual
/// pollutant's sub-index, not an average. Deterministic and pure.
#[must_use]
pub fn compute_aqi(reading: &PollutantReading) -> AqiResult {
    let sub_indices = SubIndices {
        pm25: sub_index(Pollutant::Pm25, reading.pm25),
        pm10: sub_index(Pollutant::Pm10, reading.pm10),
        no2: sub_index(Pollutant::No2, reading.no2),
        so2: sub_index(Pollutant::So2, reading.so2),
        co: sub_index(Pollutant::Co, reading.co),
        o3: sub_index(Pollutant::O3, reading.o3),
    };

    let (dominant, overall) = Pollutant::ALL
        .into_iter()
        .map(|p| (p, sub_indices.get(p)))
        .max_by_key(|(_, aqi)| *aqi)
        .unwrap_or((Pollutant::Pm25, Aqi::clamped(0)));

    debug!(
        overall = overall.value(),
        dominant = %dominant,
        pm25 = sub_indices.pm25.value(),
        pm10 = sub_indices.pm10.value(),
        no2 = sub_indices.no2.value(),
        so2 = sub_indices.so2.value(),
        co = sub_indices.co.value(),
        o3 = sub_indices.o3.value(),
        "computed AQI sub-indices"
    );

    AqiResult {
        overall,
        dominant,
        sub_indices,
    }
}
