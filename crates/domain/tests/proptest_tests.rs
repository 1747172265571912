//! Property-based tests for the AQI core
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::synthetic::{FixedClock, synthesize};
use domain::value_objects::{GeoLocation, Pollutant, PollutantReading};
use domain::{classify, compute_aqi, sub_index};
use proptest::prelude::*;

// ============================================================================
// Interpolator Property Tests
// ============================================================================

mod interpolator_tests {
    use super::*;

    fn any_pollutant() -> impl Strategy<Value = Pollutant> {
        prop_oneof![
            Just(Pollutant::Pm25),
            Just(Pollutant::Pm10),
            Just(Pollutant::No2),
            Just(Pollutant::So2),
            Just(Pollutant::Co),
            Just(Pollutant::O3),
        ]
    }

    proptest! {
        #[test]
        fn sub_index_is_bounded(
            pollutant in any_pollutant(),
            concentration in -100.0f64..10_000.0f64
        ) {
            let aqi = sub_index(pollutant, concentration);
            prop_assert!(aqi.value() <= 500);
        }

        #[test]
        fn sub_index_is_monotone(
            pollutant in any_pollutant(),
            a in 0.0f64..3000.0f64,
            b in 0.0f64..3000.0f64
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                sub_index(pollutant, lo) <= sub_index(pollutant, hi),
                "sub_index({pollutant}, {lo}) > sub_index({pollutant}, {hi})"
            );
        }

        #[test]
        fn sub_index_is_total_over_any_float(
            pollutant in any_pollutant(),
            concentration in proptest::num::f64::ANY
        ) {
            // Never panics, never exceeds the ceiling
            let aqi = sub_index(pollutant, concentration);
            prop_assert!(aqi.value() <= 500);
        }
    }
}

// ============================================================================
// Aggregator Property Tests
// ============================================================================

mod aggregator_tests {
    use super::*;

    proptest! {
        #[test]
        fn overall_equals_max_of_sub_indices(
            pm25 in 0.0f64..600.0,
            pm10 in 0.0f64..700.0,
            no2 in 0.0f64..2100.0,
            so2 in 0.0f64..1100.0,
            co in 0.0f64..60.0,
            o3 in 0.0f64..250.0
        ) {
            let reading = PollutantReading::new(pm25, pm10, no2, so2, co, o3);
            let result = compute_aqi(&reading);

            let max = Pollutant::ALL
                .into_iter()
                .map(|p| result.sub_indices.get(p))
                .max()
                .unwrap();
            prop_assert_eq!(result.overall, max);
            prop_assert_eq!(result.sub_indices.get(result.dominant), result.overall);
        }

        #[test]
        fn reading_sanitization_keeps_domain_non_negative(
            pm25 in proptest::num::f64::ANY,
            pm10 in proptest::num::f64::ANY,
            co in proptest::num::f64::ANY
        ) {
            let reading = PollutantReading::new(pm25, pm10, 0.0, 0.0, co, 0.0);
            prop_assert!(reading.pm25 >= 0.0 && reading.pm25.is_finite());
            prop_assert!(reading.pm10 >= 0.0 && reading.pm10.is_finite());
            prop_assert!(reading.co >= 0.0 && reading.co.is_finite());
        }
    }
}

// ============================================================================
// Classifier Property Tests
// ============================================================================

mod classifier_tests {
    use super::*;

    proptest! {
        #[test]
        fn classification_band_contains_value(aqi in 0u16..=500) {
            let category = classify(aqi);
            prop_assert!(category.min <= aqi && aqi <= category.max);
        }

        #[test]
        fn overflow_maps_to_hazardous(aqi in 501u16..) {
            prop_assert_eq!(classify(aqi).label, "Hazardous");
        }
    }
}

// ============================================================================
// Synthetic Generator Property Tests
// ============================================================================

mod generator_tests {
    use super::*;

    proptest! {
        #[test]
        fn synthesize_is_deterministic(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            bucket in 0u64..1_000_000
        ) {
            let location = GeoLocation::new(lat, lon).unwrap();
            let clock = FixedClock(bucket);
            let a = synthesize(&location, "Springfield", &clock);
            let b = synthesize(&location, "Springfield", &clock);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn synthesize_never_returns_zero_concentrations(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            bucket in 0u64..1_000_000
        ) {
            let location = GeoLocation::new(lat, lon).unwrap();
            let reading = synthesize(&location, "Springfield", &FixedClock(bucket));
            prop_assert!(reading.pm25 >= 1.0);
            prop_assert!(reading.pm10 >= 1.0);
            prop_assert!(reading.no2 >= 1.0);
            prop_assert!(reading.so2 >= 1.0);
            prop_assert!(reading.co >= 0.1);
            prop_assert!(reading.o3 >= 1.0);
        }

        #[test]
        fn profile_cities_synthesize_within_profile_bounds(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            bucket in 0u64..1_000_000
        ) {
            let location = GeoLocation::new(lat, lon).unwrap();
            let reading = synthesize(&location, "Dhaka", &FixedClock(bucket));
            prop_assert!((85.0..=135.0).contains(&reading.pm25));
            prop_assert!((150.0..=230.0).contains(&reading.pm10));
            prop_assert!((2.5..=4.2).contains(&reading.co));
        }
    }
}
