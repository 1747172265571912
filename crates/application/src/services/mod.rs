//! Application services

mod air_quality_service;
mod weather_service;

pub use air_quality_service::{AirQualityOptions, AirQualityService};
pub use weather_service::WeatherService;

use domain::value_objects::GeoLocation;

/// Cache key for per-location lookups: coordinates rounded to ~100m
///
/// Rounding keeps nearby requests (a dashboard refreshing while the user
/// moves around a city block) on the same cache entry.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn location_cache_key(location: &GeoLocation) -> (i64, i64) {
    (
        (location.latitude() * 1000.0).round() as i64,
        (location.longitude() * 1000.0).round() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_coordinates_share_a_key() {
        let a = GeoLocation::new_unchecked(28.61392, 77.20901);
        let b = GeoLocation::new_unchecked(28.61401, 77.20893);
        assert_eq!(location_cache_key(&a), location_cache_key(&b));
    }

    #[test]
    fn distant_coordinates_differ() {
        let a = GeoLocation::delhi();
        let b = GeoLocation::beijing();
        assert_ne!(location_cache_key(&a), location_cache_key(&b));
    }
}
