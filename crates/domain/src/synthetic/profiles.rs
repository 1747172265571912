//! Known-polluted city profiles
//!
//! Typical concentration ranges for cities where upstream providers are
//! known to under-report. These numbers are product tuning data carried over
//! for behavioral parity; they are not verified against ground truth and are
//! a candidate for config externalization.

/// Typical pollution ranges for one city
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityProfile {
    pub name: &'static str,
    /// (min, max) PM2.5 in µg/m³
    pub pm25: (f64, f64),
    /// (min, max) PM10 in µg/m³
    pub pm10: (f64, f64),
    /// (min, max) NO₂ in µg/m³
    pub no2: (f64, f64),
    /// (min, max) SO₂ in µg/m³
    pub so2: (f64, f64),
    /// (min, max) CO in mg/m³
    pub co: (f64, f64),
    /// (min, max) O₃ in µg/m³
    pub o3: (f64, f64),
    /// AQI range this city typically reports
    pub expected_aqi: (u16, u16),
}

/// Profiles for cities with chronically poor air quality
pub static CITY_PROFILES: [CityProfile; 6] = [
    CityProfile {
        name: "Delhi",
        pm25: (75.0, 120.0),
        pm10: (140.0, 220.0),
        no2: (40.0, 60.0),
        so2: (12.0, 25.0),
        co: (2.0, 4.0),
        o3: (50.0, 85.0),
        expected_aqi: (150, 250),
    },
    CityProfile {
        name: "Mumbai",
        pm25: (55.0, 85.0),
        pm10: (100.0, 150.0),
        no2: (45.0, 70.0),
        so2: (20.0, 35.0),
        co: (2.5, 4.5),
        o3: (60.0, 90.0),
        expected_aqi: (120, 180),
    },
    CityProfile {
        name: "Beijing",
        pm25: (80.0, 140.0),
        pm10: (160.0, 250.0),
        no2: (45.0, 65.0),
        so2: (25.0, 45.0),
        co: (3.0, 5.0),
        o3: (35.0, 65.0),
        expected_aqi: (150, 280),
    },
    CityProfile {
        name: "Kolkata",
        pm25: (70.0, 110.0),
        pm10: (130.0, 200.0),
        no2: (35.0, 55.0),
        so2: (15.0, 30.0),
        co: (2.2, 3.8),
        o3: (45.0, 75.0),
        expected_aqi: (140, 220),
    },
    CityProfile {
        name: "Dhaka",
        pm25: (85.0, 135.0),
        pm10: (150.0, 230.0),
        no2: (40.0, 65.0),
        so2: (18.0, 35.0),
        co: (2.5, 4.2),
        o3: (40.0, 70.0),
        expected_aqi: (160, 260),
    },
    CityProfile {
        name: "Lahore",
        pm25: (80.0, 125.0),
        pm10: (145.0, 210.0),
        no2: (38.0, 58.0),
        so2: (16.0, 32.0),
        co: (2.3, 4.0),
        o3: (45.0, 80.0),
        expected_aqi: (150, 240),
    },
];

/// Find the profile matching a location name, if any
///
/// Case-insensitive substring match, so "New Delhi, India" matches the
/// Delhi profile. First match in table order wins.
#[must_use]
pub fn find_profile(location_name: &str) -> Option<&'static CityProfile> {
    let haystack = location_name.to_lowercase();
    CITY_PROFILES
        .iter()
        .find(|profile| haystack.contains(&profile.name.to_lowercase()))
}

/// Whether a location name matches a known-polluted city
#[must_use]
pub fn is_known_polluted(location_name: &str) -> bool {
    find_profile(location_name).is_some()
}
