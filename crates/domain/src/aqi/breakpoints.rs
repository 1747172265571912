//! EPA pollutant breakpoint tables
//!
//! Each table maps closed concentration intervals to closed AQI intervals.
//! Values are the published EPA breakpoints; see
//! <https://www.airnow.gov/aqi/aqi-calculator-concentration/> to cross-check.
//! Tables are ordered, ascending, and never mutated at runtime.

use crate::value_objects::Pollutant;

/// A single breakpoint row: concentration interval mapped to an AQI interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Closed concentration interval (low, high)
    pub concentration: (f64, f64),
    /// Closed AQI interval (low, high)
    pub aqi: (u16, u16),
}

/// The AQI value reported for concentrations beyond the last table row
pub const AQI_CEILING: u16 = 500;

const fn bp(c_lo: f64, c_hi: f64, a_lo: u16, a_hi: u16) -> Breakpoint {
    Breakpoint {
        concentration: (c_lo, c_hi),
        aqi: (a_lo, a_hi),
    }
}

/// PM2.5 breakpoints in µg/m³
pub const PM25: &[Breakpoint] = &[
    bp(0.0, 12.0, 0, 50),
    bp(12.1, 35.4, 51, 100),
    bp(35.5, 55.4, 101, 150),
    bp(55.5, 150.4, 151, 200),
    bp(150.5, 250.4, 201, 300),
    bp(250.5, 350.4, 301, 400),
    bp(350.5, 500.4, 401, 500),
];

/// PM10 breakpoints in µg/m³
pub const PM10: &[Breakpoint] = &[
    bp(0.0, 54.0, 0, 50),
    bp(55.0, 154.0, 51, 100),
    bp(155.0, 254.0, 101, 150),
    bp(255.0, 354.0, 151, 200),
    bp(355.0, 424.0, 201, 300),
    bp(425.0, 504.0, 301, 400),
    bp(505.0, 604.0, 401, 500),
];

/// NO₂ breakpoints in µg/m³ (ppb-scaled upstream)
pub const NO2: &[Breakpoint] = &[
    bp(0.0, 53.0, 0, 50),
    bp(54.0, 100.0, 51, 100),
    bp(101.0, 360.0, 101, 150),
    bp(361.0, 649.0, 151, 200),
    bp(650.0, 1249.0, 201, 300),
    bp(1250.0, 1649.0, 301, 400),
    bp(1650.0, 2049.0, 401, 500),
];

/// SO₂ breakpoints in µg/m³
pub const SO2: &[Breakpoint] = &[
    bp(0.0, 35.0, 0, 50),
    bp(36.0, 75.0, 51, 100),
    bp(76.0, 185.0, 101, 150),
    bp(186.0, 304.0, 151, 200),
    bp(305.0, 604.0, 201, 300),
    bp(605.0, 804.0, 301, 400),
    bp(805.0, 1004.0, 401, 500),
];

/// CO breakpoints in mg/m³
pub const CO: &[Breakpoint] = &[
    bp(0.0, 4.4, 0, 50),
    bp(4.5, 9.4, 51, 100),
    bp(9.5, 12.4, 101, 150),
    bp(12.5, 15.4, 151, 200),
    bp(15.5, 30.4, 201, 300),
    bp(30.5, 40.4, 301, 400),
    bp(40.5, 50.4, 401, 500),
];

/// O₃ breakpoints in µg/m³
///
/// The published ozone table stops at the Very Unhealthy band; anything
/// above 200 µg/m³ reports the ceiling.
pub const O3: &[Breakpoint] = &[
    bp(0.0, 54.0, 0, 50),
    bp(55.0, 70.0, 51, 100),
    bp(71.0, 85.0, 101, 150),
    bp(86.0, 105.0, 151, 200),
    bp(106.0, 200.0, 201, 300),
];

/// Look up the breakpoint table for a pollutant
#[must_use]
pub const fn table(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::Pm25 => PM25,
        Pollutant::Pm10 => PM10,
        Pollutant::No2 => NO2,
        Pollutant::So2 => SO2,
        Pollutant::Co => CO,
        Pollutant::O3 => O3,
    }
}
