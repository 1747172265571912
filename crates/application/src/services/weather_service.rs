//! Weather report assembly
//!
//! Thin orchestration over the weather port with the same per-location TTL
//! cache the air quality service uses.

use std::sync::Arc;
use std::time::Duration;

use domain::value_objects::GeoLocation;
use moka::future::Cache;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{CurrentWeather, ForecastEntry, WeatherPort};

use super::location_cache_key;

/// Orchestrates weather lookups for the dashboard
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    current_cache: Cache<(i64, i64), CurrentWeather>,
    forecast_cache: Cache<(i64, i64), Vec<ForecastEntry>>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("cached_current", &self.current_cache.entry_count())
            .field("cached_forecasts", &self.forecast_cache.entry_count())
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a service caching results for `cache_ttl`
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>, cache_ttl: Duration, cache_capacity: u64) -> Self {
        Self {
            weather,
            current_cache: Cache::builder()
                .max_capacity(cache_capacity)
                .time_to_live(cache_ttl)
                .build(),
            forecast_cache: Cache::builder()
                .max_capacity(cache_capacity)
                .time_to_live(cache_ttl)
                .build(),
        }
    }

    /// Current conditions for a location
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn current(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentWeather, ApplicationError> {
        let key = location_cache_key(location);
        if let Some(hit) = self.current_cache.get(&key).await {
            debug!("serving current weather from cache");
            return Ok(hit);
        }

        let current = self.weather.get_current_weather(location).await?;
        self.current_cache.insert(key, current.clone()).await;
        Ok(current)
    }

    /// Short-term forecast for a location
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastEntry>, ApplicationError> {
        let key = location_cache_key(location);
        if let Some(hit) = self.forecast_cache.get(&key).await {
            debug!("serving forecast from cache");
            return Ok(hit);
        }

        let forecast = self.weather.get_forecast(location).await?;
        self.forecast_cache.insert(key, forecast.clone()).await;
        Ok(forecast)
    }

    /// Whether the weather provider currently responds
    pub async fn is_healthy(&self) -> bool {
        self.weather.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockWeatherPort, WeatherCondition};
    use chrono::Utc;

    fn sample_current() -> CurrentWeather {
        CurrentWeather {
            temperature: 21.5,
            feels_like: 20.8,
            humidity: 55,
            pressure: 1015.0,
            wind_speed: 3.4,
            wind_direction: 220,
            visibility: Some(10_000.0),
            condition: WeatherCondition::Clear,
            description: "clear sky".to_string(),
            observed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn current_weather_passes_through() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_get_current_weather()
            .returning(|_| Ok(sample_current()));

        let service = WeatherService::new(Arc::new(weather), Duration::from_secs(60), 16);
        let current = service.current(&GeoLocation::zurich()).await.unwrap();
        assert!((current.temperature - 21.5).abs() < f64::EPSILON);
        assert_eq!(current.condition, WeatherCondition::Clear);
    }

    #[tokio::test]
    async fn current_weather_is_cached() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_get_current_weather()
            .times(1)
            .returning(|_| Ok(sample_current()));

        let service = WeatherService::new(Arc::new(weather), Duration::from_secs(60), 16);
        let location = GeoLocation::zurich();
        let first = service.current(&location).await.unwrap();
        let second = service.current(&location).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn forecast_errors_propagate() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_get_forecast()
            .returning(|_| Err(ApplicationError::ExternalService("down".into())));

        let service = WeatherService::new(Arc::new(weather), Duration::from_secs(60), 16);
        let result = service.forecast(&GeoLocation::zurich()).await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn health_reflects_provider_availability() {
        let mut weather = MockWeatherPort::new();
        weather.expect_is_available().returning(|| true);

        let service = WeatherService::new(Arc::new(weather), Duration::from_secs(60), 16);
        assert!(service.is_healthy().await);
    }
}
