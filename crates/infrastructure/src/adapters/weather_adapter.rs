//! Weather adapter - Implements WeatherPort using integration_openweather

use application::error::ApplicationError;
use application::ports::{CurrentWeather, ForecastEntry, WeatherCondition, WeatherPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_openweather::{
    AirDataClient, CurrentConditions, ForecastStep, OpenWeatherClient, OpenWeatherConfig,
    OpenWeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather data from OpenWeatherMap
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenWeatherError::ParseError(e) => ApplicationError::Internal(e),
            OpenWeatherError::InvalidCoordinates => {
                ApplicationError::InvalidOperation("Invalid coordinates".into())
            },
            OpenWeatherError::InvalidApiKey => {
                ApplicationError::Configuration("OpenWeatherMap API key rejected".into())
            },
            OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert provider conditions to the application model
    fn map_current(current: &CurrentConditions) -> CurrentWeather {
        CurrentWeather {
            temperature: current.temperature,
            feels_like: current.feels_like,
            humidity: current.humidity,
            pressure: current.pressure,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            visibility: current.visibility,
            condition: WeatherCondition::from_provider_group(&current.condition.main),
            description: current.condition.description.clone(),
            observed_at: current.observed_at,
        }
    }

    /// Convert a provider forecast step to the application model
    fn map_step(step: &ForecastStep) -> ForecastEntry {
        ForecastEntry {
            timestamp: step.timestamp,
            temperature: step.temperature,
            condition: WeatherCondition::from_provider_group(&step.condition.main),
            description: step.condition.description.clone(),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentWeather, ApplicationError> {
        let current = self
            .client
            .get_current_weather(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        let mapped = Self::map_current(&current);
        debug!(
            temperature = mapped.temperature,
            condition = %mapped.condition,
            "retrieved current weather"
        );
        Ok(mapped)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastEntry>, ApplicationError> {
        let steps = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(steps = steps.len(), "retrieved forecast");
        Ok(steps.iter().map(Self::map_step).collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
