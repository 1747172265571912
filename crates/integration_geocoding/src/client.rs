//! TomTom Search HTTP client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{PlaceMatch, ReverseGeocodeResponse, SearchResponse};

/// TomTom client errors
#[derive(Debug, Error)]
pub enum TomTomError {
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

/// TomTom client configuration
#[derive(Debug, Clone)]
pub struct TomTomConfig {
    /// API base URL (default: <https://api.tomtom.com>)
    pub base_url: String,
    /// API key
    pub api_key: SecretString,
    /// Connection timeout in seconds
    pub timeout_secs: u64,
}

impl TomTomConfig {
    /// Configuration with the production base URL
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: "https://api.tomtom.com".to_string(),
            api_key,
            timeout_secs: 30,
        }
    }
}

/// Client trait for geocoding operations
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve coordinates to a display name
    ///
    /// Returns `None` when the provider has no address for the coordinates.
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, TomTomError>;

    /// Fuzzy-search locations by a free-form query
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceMatch>, TomTomError>;
}

/// TomTom Search HTTP client implementation
#[derive(Debug)]
pub struct TomTomClient {
    client: Client,
    config: TomTomConfig,
}

impl TomTomClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TomTomConfig) -> Result<Self, TomTomError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TomTomError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), TomTomError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(TomTomError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Map response status to an error, or pass the body through as JSON
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TomTomError> {
        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(TomTomError::InvalidApiKey);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TomTomError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(TomTomError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(TomTomError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| TomTomError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for TomTomClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, TomTomError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!(
            "{}/search/2/reverseGeocode/{latitude},{longitude}.json",
            self.config.base_url
        );
        debug!("reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| TomTomError::RequestFailed(e.to_string()))?;

        let parsed: ReverseGeocodeResponse = Self::read_json(response).await?;

        Ok(parsed
            .addresses
            .first()
            .and_then(|entry| entry.address.display_name()))
    }

    #[instrument(skip(self), fields(query = %query, limit))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<PlaceMatch>, TomTomError> {
        let encoded: String = query
            .bytes()
            .flat_map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    vec![b as char]
                },
                _ => format!("%{b:02X}").chars().collect(),
            })
            .collect();

        let url = format!("{}/search/2/search/{encoded}.json", self.config.base_url);
        debug!("searching locations");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.expose_secret()),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| TomTomError::RequestFailed(e.to_string()))?;

        let parsed: SearchResponse = Self::read_json(response).await?;

        Ok(parsed
            .results
            .into_iter()
            .filter_map(|result| {
                result.address.display_name().map(|name| PlaceMatch {
                    name,
                    latitude: result.position.lat,
                    longitude: result.position.lon,
                })
            })
            .collect())
    }
}
