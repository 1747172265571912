//! Air quality adapter - Implements AirQualityPort using integration_openweather

use application::error::ApplicationError;
use application::ports::AirQualityPort;
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PollutantReading};
use integration_openweather::{AirDataClient, AirSample, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
use tracing::{debug, instrument};

/// Adapter for live pollutant concentrations from OpenWeatherMap
pub struct AirQualityAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for AirQualityAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirQualityAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl AirQualityAdapter {
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

    /// Convert a provider sample into the domain reading
    ///
    /// The provider reports every component in µg/m³; the domain expects CO
    /// in mg/m³, so it is divided by 1000 and kept at two decimals. The
    /// remaining components are rounded to whole numbers the way the
    /// dashboard displays them.
    fn map_sample(sample: &AirSample) -> PollutantReading {
        PollutantReading::new(
            sample.pm2_5.round(),
            sample.pm10.round(),
            sample.no2.round(),
            sample.so2.round(),
            (sample.co / 1000.0 * 100.0).round() / 100.0,
            sample.o3.round(),
        )
    }
}

#[async_trait]
impl AirQualityPort for AirQualityAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_reading(
        &self,
        location: &GeoLocation,
    ) -> Result<PollutantReading, ApplicationError> {
        let sample = self
            .client
            .get_air_pollution(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        let reading = Self::map_sample(&sample);
        debug!(
            pm25 = reading.pm25,
            pm10 = reading.pm10,
            co = reading.co,
            "retrieved live pollutant reading"
        );
        Ok(reading)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
