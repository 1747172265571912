//! Integration configurations: OpenWeatherMap, TomTom, air quality policy.

use std::time::Duration;

use application::error::ApplicationError;
use application::services::AirQualityOptions;
use secrecy::SecretString;
use serde::Deserialize;

use super::default_true;

// ==============================
// OpenWeatherMap Configuration
// ==============================

/// OpenWeatherMap provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// API base URL
    #[serde(default = "default_openweather_base_url")]
    pub base_url: String,

    /// API key (required to reach the provider)
    ///
    /// Obtain from <https://openweathermap.org/api>
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,
}

fn default_openweather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_provider_timeout() -> u64 {
    30
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_openweather_base_url(),
            api_key: None,
            timeout_secs: default_provider_timeout(),
        }
    }
}

impl OpenWeatherAppConfig {
    /// Convert to the integration client configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set.
    pub fn to_client_config(
        &self,
    ) -> Result<integration_openweather::OpenWeatherConfig, ApplicationError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            ApplicationError::Configuration("openweather.api_key is not set".to_string())
        })?;
        Ok(integration_openweather::OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key,
            timeout_secs: self.timeout_secs,
        })
    }
}

// ==============================
// TomTom Configuration
// ==============================

/// TomTom geocoding provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingAppConfig {
    /// API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// API key (required to reach the provider)
    ///
    /// Obtain from <https://developer.tomtom.com/>
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of search results to return (1-10)
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

fn default_geocoding_base_url() -> String {
    "https://api.tomtom.com".to_string()
}

const fn default_search_limit() -> usize {
    5
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            api_key: None,
            timeout_secs: default_provider_timeout(),
            search_limit: default_search_limit(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to the integration client configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set.
    pub fn to_client_config(
        &self,
    ) -> Result<integration_geocoding::TomTomConfig, ApplicationError> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            ApplicationError::Configuration("geocoding.api_key is not set".to_string())
        })?;
        Ok(integration_geocoding::TomTomConfig {
            base_url: self.base_url.clone(),
            api_key,
            timeout_secs: self.timeout_secs,
        })
    }
}

// ==============================
// Air Quality Policy Configuration
// ==============================

/// Air quality policy settings
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityAppConfig {
    /// Replace implausibly clean live readings for known polluted cities
    #[serde(default = "default_true")]
    pub enable_override: bool,

    /// Synthesize a reading when the live provider fails
    #[serde(default = "default_true")]
    pub enable_synthetic_fallback: bool,

    /// Snapshot cache TTL in minutes
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,

    /// Maximum number of cached snapshots
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// Default location when a request carries no coordinates
    ///
    /// Configured as inline table: `{ latitude = 28.61, longitude = 77.21 }`
    #[serde(default)]
    pub default_location: Option<GeoLocationConfig>,
}

const fn default_cache_ttl_minutes() -> u32 {
    15
}

const fn default_cache_capacity() -> u64 {
    1024
}

impl Default for AirQualityAppConfig {
    fn default() -> Self {
        Self {
            enable_override: true,
            enable_synthetic_fallback: true,
            cache_ttl_minutes: default_cache_ttl_minutes(),
            cache_capacity: default_cache_capacity(),
            default_location: None,
        }
    }
}

impl AirQualityAppConfig {
    /// Convert to the application service options
    #[must_use]
    pub fn to_options(&self) -> AirQualityOptions {
        AirQualityOptions {
            enable_override: self.enable_override,
            enable_synthetic_fallback: self.enable_synthetic_fallback,
            cache_ttl: Duration::from_secs(u64::from(self.cache_ttl_minutes) * 60),
            cache_capacity: self.cache_capacity,
        }
    }
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<domain::GeoLocation> {
        domain::GeoLocation::new(self.latitude, self.longitude).ok()
    }
}
