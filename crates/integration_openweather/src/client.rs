//! OpenWeatherMap HTTP client

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    AirPollutionResponse, AirSample, ConditionGroup, CurrentConditions, ForecastResponse,
    ForecastStep, WeatherResponse,
};

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a provider response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// The API key was rejected
    #[error("API key rejected by provider")]
    InvalidApiKey,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    pub base_url: String,
    /// API key
    pub api_key: SecretString,
    /// Connection timeout in seconds
    pub timeout_secs: u64,
}

impl OpenWeatherConfig {
    /// Configuration with the production base URL
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key,
            timeout_secs: 30,
        }
    }
}

/// Client trait for OpenWeatherMap data retrieval
#[async_trait]
pub trait AirDataClient: Send + Sync {
    /// Get current pollutant components for a location
    async fn get_air_pollution(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirSample, OpenWeatherError>;

    /// Get current weather conditions for a location
    async fn get_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, OpenWeatherError>;

    /// Get the 5-day/3-hour forecast for a location
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastStep>, OpenWeatherError>;

    /// Check if the provider is reachable with the configured key
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenWeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenWeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Issue a GET against one of the provider endpoints
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        latitude: f64,
        longitude: f64,
        metric_units: bool,
    ) -> Result<T, OpenWeatherError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        debug!(endpoint, "querying OpenWeatherMap");

        let mut query = vec![
            ("lat".to_string(), latitude.to_string()),
            ("lon".to_string(), longitude.to_string()),
            (
                "appid".to_string(),
                self.config.api_key.expose_secret().to_string(),
            ),
        ];
        if metric_units {
            query.push(("units".to_string(), "metric".to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(OpenWeatherError::InvalidApiKey);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenWeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenWeatherError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }
        if !status.is_success() {
            return Err(OpenWeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }

    /// Convert a Unix timestamp to `DateTime<Utc>`
    fn parse_timestamp(dt: i64) -> Result<DateTime<Utc>, OpenWeatherError> {
        DateTime::<Utc>::from_timestamp(dt, 0)
            .ok_or_else(|| OpenWeatherError::ParseError(format!("Invalid timestamp: {dt}")))
    }

    /// First condition entry, or a placeholder when the provider omits it
    fn first_condition(conditions: &[crate::models::RawCondition]) -> ConditionGroup {
        conditions.first().map_or_else(
            || ConditionGroup {
                main: String::new(),
                description: String::new(),
            },
            |c| ConditionGroup {
                main: c.main.clone(),
                description: c.description.clone(),
            },
        )
    }
}

#[async_trait]
impl AirDataClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_air_pollution(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirSample, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let response: AirPollutionResponse = self
            .get_json("air_pollution", latitude, longitude, false)
            .await?;

        let entry = response.list.first().ok_or_else(|| {
            OpenWeatherError::ParseError("No air pollution data in response".to_string())
        })?;

        Ok(AirSample {
            observed_at: Self::parse_timestamp(entry.dt)?,
            pm2_5: entry.components.pm2_5,
            pm10: entry.components.pm10,
            no2: entry.components.no2,
            so2: entry.components.so2,
            co: entry.components.co,
            o3: entry.components.o3,
        })
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let response: WeatherResponse = self.get_json("weather", latitude, longitude, true).await?;

        Ok(CurrentConditions {
            observed_at: Self::parse_timestamp(response.dt)?,
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            pressure: response.main.pressure,
            wind_speed: response.wind.speed,
            wind_direction: response.wind.deg,
            visibility: response.visibility,
            condition: Self::first_condition(&response.weather),
        })
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastStep>, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let response: ForecastResponse =
            self.get_json("forecast", latitude, longitude, true).await?;

        response
            .list
            .iter()
            .map(|item| {
                Ok(ForecastStep {
                    timestamp: Self::parse_timestamp(item.dt)?,
                    temperature: item.main.temp,
                    condition: Self::first_condition(&item.weather),
                })
            })
            .collect()
    }

    async fn is_healthy(&self) -> bool {
        // Cheap probe against a fixed location
        self.get_air_pollution(28.6139, 77.209).await.is_ok()
    }
}
