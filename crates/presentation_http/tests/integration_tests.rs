//! Integration tests for the HTTP API
//!
//! Exercise the router end-to-end against stub provider ports.

use std::sync::Arc;
use std::time::Duration;

use application::error::ApplicationError;
use application::ports::{
    AirQualityPort, CurrentWeather, ForecastEntry, GeocodingPort, LocationMatch, WeatherCondition,
    WeatherPort,
};
use application::{AirQualityOptions, AirQualityService, WeatherService};
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use domain::synthetic::FixedClock;
use domain::value_objects::{GeoLocation, PollutantReading};
use infrastructure::AppConfig;
use presentation_http::{AppState, create_router};

// ============================================================================
// Stub providers
// ============================================================================

struct StubAirQuality {
    reading: Option<PollutantReading>,
    available: bool,
}

#[async_trait]
impl AirQualityPort for StubAirQuality {
    async fn fetch_reading(
        &self,
        _location: &GeoLocation,
    ) -> Result<PollutantReading, ApplicationError> {
        self.reading
            .ok_or_else(|| ApplicationError::ExternalService("provider down".to_string()))
    }

    async fn is_available(&self) -> bool {
        self.available
    }
}

struct StubGeocoding {
    name: Option<String>,
    available: bool,
}

#[async_trait]
impl GeocodingPort for StubGeocoding {
    async fn reverse_geocode(
        &self,
        _location: &GeoLocation,
    ) -> Result<Option<String>, ApplicationError> {
        if self.available {
            Ok(self.name.clone())
        } else {
            Err(ApplicationError::ExternalService("geocoder down".to_string()))
        }
    }

    async fn search(
        &self,
        query: &str,
        _limit: usize,
    ) -> Result<Vec<LocationMatch>, ApplicationError> {
        if query.contains("Delhi") {
            Ok(vec![LocationMatch {
                name: "Delhi, India".to_string(),
                location: GeoLocation::delhi(),
            }])
        } else {
            Ok(vec![])
        }
    }
}

struct StubWeather {
    available: bool,
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn get_current_weather(
        &self,
        _location: &GeoLocation,
    ) -> Result<CurrentWeather, ApplicationError> {
        Ok(CurrentWeather {
            temperature: 18.4,
            feels_like: 17.9,
            humidity: 58,
            pressure: 1019.0,
            wind_speed: 3.6,
            wind_direction: 250,
            visibility: Some(10_000.0),
            condition: WeatherCondition::Clouds,
            description: "few clouds".to_string(),
            observed_at: Utc::now(),
        })
    }

    async fn get_forecast(
        &self,
        _location: &GeoLocation,
    ) -> Result<Vec<ForecastEntry>, ApplicationError> {
        Ok(vec![
            ForecastEntry {
                timestamp: Utc::now(),
                temperature: 16.0,
                condition: WeatherCondition::Rain,
                description: "light rain".to_string(),
            },
            ForecastEntry {
                timestamp: Utc::now(),
                temperature: 14.5,
                condition: WeatherCondition::Clear,
                description: "clear sky".to_string(),
            },
        ])
    }

    async fn is_available(&self) -> bool {
        self.available
    }
}

// ============================================================================
// Test harness
// ============================================================================

fn plausible_reading() -> PollutantReading {
    PollutantReading::new(40.0, 80.0, 30.0, 10.0, 1.0, 40.0)
}

fn test_server(air: StubAirQuality, geocoding: StubGeocoding, weather: StubWeather) -> TestServer {
    let geocoding: Arc<dyn GeocodingPort> = Arc::new(geocoding);

    let air_quality_service = AirQualityService::with_clock(
        Arc::new(air),
        Arc::clone(&geocoding),
        AirQualityOptions::default(),
        Arc::new(FixedClock(487_000)),
    );
    let weather_service =
        WeatherService::new(Arc::new(weather), Duration::from_secs(60), 16);

    let state = AppState {
        air_quality: Arc::new(air_quality_service),
        weather: Arc::new(weather_service),
        geocoding,
        config: Arc::new(AppConfig::default()),
    };

    TestServer::new(create_router(state)).unwrap()
}

fn default_server() -> TestServer {
    test_server(
        StubAirQuality {
            reading: Some(plausible_reading()),
            available: true,
        },
        StubGeocoding {
            name: Some("Zurich".to_string()),
            available: true,
        },
        StubWeather { available: true },
    )
}

// ============================================================================
// Health endpoints
// ============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let server = default_server();
    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_returns_ok_when_providers_up() {
    let server = default_server();
    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["providers"]["air_quality"], true);
}

#[tokio::test]
async fn ready_returns_503_when_all_providers_down() {
    let server = test_server(
        StubAirQuality {
            reading: None,
            available: false,
        },
        StubGeocoding {
            name: None,
            available: true,
        },
        StubWeather { available: false },
    );
    let response = server.get("/ready").await;

    assert_eq!(response.status_code(), 503);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
}

// ============================================================================
// Air quality endpoint
// ============================================================================

#[tokio::test]
async fn air_quality_serves_live_snapshot() {
    let server = default_server();
    let response = server
        .get("/v1/air-quality")
        .add_query_param("latitude", 47.3769)
        .add_query_param("longitude", 8.5417)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["aqi"], 112);
    assert_eq!(body["source"], "live");
    assert_eq!(body["location_name"], "Zurich");
    assert_eq!(body["category"]["label"], "Unhealthy for Sensitive Groups");
    assert_eq!(body["dominant_pollutant"], "PM2.5");
    assert!(body["advice"]["headline"].is_string());
}

#[tokio::test]
async fn air_quality_overrides_clean_reading_for_polluted_city() {
    let server = test_server(
        StubAirQuality {
            reading: Some(PollutantReading::new(2.0, 5.0, 3.0, 1.0, 0.2, 10.0)),
            available: true,
        },
        StubGeocoding {
            name: Some("New Delhi, India".to_string()),
            available: true,
        },
        StubWeather { available: true },
    );

    let response = server
        .get("/v1/air-quality")
        .add_query_param("latitude", 28.6139)
        .add_query_param("longitude", 77.209)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["source"], "realistic_override");
    assert!(body["aqi"].as_u64().unwrap() >= 150);
}

#[tokio::test]
async fn air_quality_falls_back_to_synthetic_when_provider_down() {
    let server = test_server(
        StubAirQuality {
            reading: None,
            available: false,
        },
        StubGeocoding {
            name: Some("Zurich".to_string()),
            available: true,
        },
        StubWeather { available: true },
    );

    let response = server
        .get("/v1/air-quality")
        .add_query_param("latitude", 47.3769)
        .add_query_param("longitude", 8.5417)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["source"], "simulated");
    assert!(body["aqi"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn air_quality_requires_coordinates() {
    let server = default_server();
    let response = server.get("/v1/air-quality").await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn air_quality_rejects_out_of_range_coordinates() {
    let server = default_server();
    let response = server
        .get("/v1/air-quality")
        .add_query_param("latitude", 95.0)
        .add_query_param("longitude", 0.0)
        .await;
    assert_eq!(response.status_code(), 400);
}

// ============================================================================
// Weather endpoints
// ============================================================================

#[tokio::test]
async fn weather_returns_current_conditions() {
    let server = default_server();
    let response = server
        .get("/v1/weather")
        .add_query_param("latitude", 47.3769)
        .add_query_param("longitude", 8.5417)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["temperature"], 18.4);
    assert_eq!(body["condition"], "clouds");
    assert_eq!(body["condition_label"], "Cloudy");
}

#[tokio::test]
async fn forecast_returns_entries() {
    let server = default_server();
    let response = server
        .get("/v1/weather/forecast")
        .add_query_param("latitude", 47.3769)
        .add_query_param("longitude", 8.5417)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    assert_eq!(body["entries"][0]["condition"], "rain");
}

// ============================================================================
// Location endpoints
// ============================================================================

#[tokio::test]
async fn location_search_returns_matches() {
    let server = default_server();
    let response = server
        .get("/v1/locations/search")
        .add_query_param("q", "Delhi")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["results"][0]["name"], "Delhi, India");
}

#[tokio::test]
async fn location_search_rejects_empty_query() {
    let server = default_server();
    let response = server
        .get("/v1/locations/search")
        .add_query_param("q", "  ")
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn location_reverse_returns_name() {
    let server = default_server();
    let response = server
        .get("/v1/locations/reverse")
        .add_query_param("latitude", 47.3769)
        .add_query_param("longitude", 8.5417)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Zurich");
}
