//! Synthetic reading generation and the override decision
//!
//! Generated values are deterministic for a given location, name, and hour
//! bucket. The hour bucket comes from an injectable [`HourClock`] so tests
//! can pin the current time.

use tracing::debug;

use crate::aqi::compute_aqi;
use crate::value_objects::{GeoLocation, PollutantReading};

use super::profiles::{CityProfile, find_profile};

/// Fraction of a profile's expected minimum AQI below which live data is
/// considered implausibly clean
const OVERRIDE_THRESHOLD: f64 = 0.6;

/// Source of the coarse time seed (Unix milliseconds bucketed by hour)
pub trait HourClock: Send + Sync {
    /// Current hour bucket: `floor(unix_millis / 3_600_000)`
    fn hour_bucket(&self) -> u64;
}

/// Wall-clock backed [`HourClock`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl HourClock for SystemClock {
    fn hour_bucket(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis() / 3_600_000).unwrap_or(0)
    }
}

/// Fixed [`HourClock`] for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl HourClock for FixedClock {
    fn hour_bucket(&self) -> u64 {
        self.0
    }
}

/// Decide whether a live reading should be replaced with synthetic data
///
/// True only when the location matches a known-polluted profile AND the AQI
/// computed from the live reading is below 60% of that profile's expected
/// minimum. Locations without a profile never override, no matter how clean
/// the reading looks.
#[must_use]
pub fn should_override(location_name: &str, live_reading: &PollutantReading) -> bool {
    let Some(profile) = find_profile(location_name) else {
        return false;
    };

    let live_aqi = compute_aqi(live_reading).overall;
    let cutoff = f64::from(profile.expected_aqi.0) * OVERRIDE_THRESHOLD;
    let suspicious = f64::from(live_aqi.value()) < cutoff;

    if suspicious {
        debug!(
            city = profile.name,
            live_aqi = live_aqi.value(),
            expected_min = profile.expected_aqi.0,
            "live reading implausibly clean for known polluted city"
        );
    }

    suspicious
}

/// Generate a plausible pollutant reading for a location
///
/// Known-polluted cities draw concentrations from their profile range at a
/// deterministic fraction; everywhere else falls back to an urban/rural
/// heuristic with a smooth hourly variation. Stable within one hour bucket.
#[must_use]
pub fn synthesize(
    location: &GeoLocation,
    location_name: &str,
    clock: &dyn HourClock,
) -> PollutantReading {
    let time_seed = clock.hour_bucket();
    let combined = combined_seed(location, time_seed);

    if let Some(profile) = find_profile(location_name) {
        return from_profile(profile, combined);
    }

    generic_fallback(location, time_seed, combined)
}

/// Location/time seed: `(|sin(lat·lng·1000)|·10000 + hour) mod 10000`
#[allow(clippy::cast_precision_loss)]
fn combined_seed(location: &GeoLocation, time_seed: u64) -> f64 {
    let location_seed = (location.latitude() * location.longitude() * 1000.0).sin().abs() * 10000.0;
    (location_seed + time_seed as f64) % 10000.0
}

/// Place a value linearly within a (min, max) range
fn pick(range: (f64, f64), fraction: f64) -> f64 {
    (range.1 - range.0).mul_add(fraction, range.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn from_profile(profile: &CityProfile, combined: f64) -> PollutantReading {
    let variation = (combined % 100.0) / 100.0;

    debug!(city = profile.name, variation, "synthesizing profile reading");

    PollutantReading::new(
        pick(profile.pm25, variation).round(),
        pick(profile.pm10, variation).round(),
        pick(profile.no2, variation).round(),
        pick(profile.so2, variation).round(),
        round_one_decimal(pick(profile.co, variation)),
        pick(profile.o3, variation).round(),
    )
}

#[allow(clippy::cast_precision_loss)]
fn generic_fallback(location: &GeoLocation, time_seed: u64, combined: f64) -> PollutantReading {
    let urban_factor = (location.latitude() + location.longitude()).abs() % 10.0;
    let is_urban = urban_factor > 5.0;

    let (pm25, pm10, no2, so2, co, o3) = if is_urban {
        (
            urban_factor.mul_add(5.0, 25.0),
            urban_factor.mul_add(10.0, 45.0),
            urban_factor.mul_add(4.0, 25.0),
            urban_factor.mul_add(2.0, 8.0),
            urban_factor.mul_add(0.2, 1.2),
            urban_factor.mul_add(5.0, 35.0),
        )
    } else {
        (
            urban_factor.mul_add(2.0, 10.0),
            urban_factor.mul_add(5.0, 20.0),
            urban_factor.mul_add(2.0, 10.0),
            urban_factor.mul_add(1.0, 3.0),
            urban_factor.mul_add(0.1, 0.5),
            urban_factor.mul_add(3.0, 25.0),
        )
    };

    let time_variation = (time_seed as f64 * 0.1).sin() * 0.2;
    let random_variation = ((combined % 100.0) - 50.0) / 500.0;
    let total = 1.0 + time_variation + random_variation;

    debug!(urban_factor, is_urban, total, "synthesizing fallback reading");

    PollutantReading::new(
        (pm25 * total).round().max(1.0),
        (pm10 * total).round().max(1.0),
        (no2 * total).round().max(1.0),
        (so2 * total).round().max(1.0),
        round_one_decimal(co * total).max(0.1),
        (o3 * total).round().max(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::compute_aqi;

    #[test]
    fn override_requires_known_city() {
        // A reading of zero is as clean as it gets, but Zurich has no profile
        assert!(!should_override("Zurich", &PollutantReading::zero()));
    }

    #[test]
    fn override_triggers_below_sixty_percent_of_expected_minimum() {
        // Delhi expects AQI >= 150; the cutoff is 90.
        // PM2.5 30.1 µg/m³ → sub-index 89 (< 90): override
        let clean = PollutantReading::new(30.1, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(compute_aqi(&clean).overall.value(), 89);
        assert!(should_override("Delhi", &clean));

        // PM2.5 31.0 µg/m³ → sub-index 91 (>= 90): plausible enough
        let plausible = PollutantReading::new(31.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(compute_aqi(&plausible).overall.value(), 91);
        assert!(!should_override("Delhi", &plausible));
    }

    #[test]
    fn override_matches_substrings_of_location_names() {
        let clean = PollutantReading::zero();
        assert!(should_override("New Delhi, India", &clean));
        assert!(should_override("beijing", &clean));
    }

    #[test]
    fn synthesize_is_deterministic_within_an_hour_bucket() {
        let clock = FixedClock(487_000);
        let loc = GeoLocation::delhi();
        let a = synthesize(&loc, "Delhi", &clock);
        let b = synthesize(&loc, "Delhi", &clock);
        assert_eq!(a, b);
    }

    #[test]
    fn synthesize_varies_across_hour_buckets() {
        let loc = GeoLocation::delhi();
        let a = synthesize(&loc, "Delhi", &FixedClock(487_000));
        let b = synthesize(&loc, "Delhi", &FixedClock(487_037));
        assert_ne!(a, b);
    }

    #[test]
    fn profile_values_stay_within_the_profile_range() {
        let loc = GeoLocation::delhi();
        for bucket in 0..200 {
            let reading = synthesize(&loc, "Delhi", &FixedClock(bucket));
            assert!((75.0..=120.0).contains(&reading.pm25), "pm25 {}", reading.pm25);
            assert!((140.0..=220.0).contains(&reading.pm10), "pm10 {}", reading.pm10);
            assert!((2.0..=4.0).contains(&reading.co), "co {}", reading.co);
        }
    }

    #[test]
    fn profile_reading_computes_into_a_polluted_aqi() {
        let loc = GeoLocation::delhi();
        let reading = synthesize(&loc, "Delhi", &FixedClock(12_345));
        let aqi = compute_aqi(&reading).overall.value();
        assert!(aqi >= 150, "Delhi synthetic AQI should look polluted, got {aqi}");
    }

    #[test]
    fn fallback_is_used_for_unknown_locations() {
        let loc = GeoLocation::zurich();
        let reading = synthesize(&loc, "Zurich", &FixedClock(1000));
        // Fallback values are floored, never zero
        assert!(reading.pm25 >= 1.0);
        assert!(reading.pm10 >= 1.0);
        assert!(reading.co >= 0.1);
    }

    #[test]
    fn fallback_urban_classification_scales_base_levels() {
        // |30.0 + (-23.0)| % 10 = 7 → urban
        let urban = GeoLocation::new_unchecked(30.0, -23.0);
        // |1.0 + 1.0| % 10 = 2 → rural
        let rural = GeoLocation::new_unchecked(1.0, 1.0);
        let clock = FixedClock(500);

        let urban_reading = synthesize(&urban, "Somewhere", &clock);
        let rural_reading = synthesize(&rural, "Elsewhere", &clock);
        assert!(urban_reading.pm25 > rural_reading.pm25);
        assert!(urban_reading.no2 > rural_reading.no2);
    }

    #[test]
    fn system_clock_produces_a_plausible_bucket() {
        // Hour buckets since the epoch: well past 400k by 2024
        assert!(SystemClock.hour_bucket() > 400_000);
    }
}
