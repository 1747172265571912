//! Air quality snapshot orchestration
//!
//! Assembles the dashboard's air quality view: resolve a display name for
//! the coordinates, fetch live concentrations, decide whether the live data
//! is plausible, fall back to synthetic data when the provider is down, and
//! run the AQI computation. Snapshots are cached per location with a TTL so
//! a refreshing dashboard does not hammer the provider.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use domain::entities::{AirQualitySnapshot, DataSource, HealthAdvice};
use domain::synthetic::{HourClock, SystemClock, should_override, synthesize};
use domain::value_objects::{GeoLocation, PollutantReading};
use moka::future::Cache;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AirQualityPort, GeocodingPort};

use super::location_cache_key;

/// Display name used when reverse geocoding yields nothing
const UNKNOWN_LOCATION: &str = "Unknown location";

/// Tuning knobs for the air quality service
#[derive(Debug, Clone)]
pub struct AirQualityOptions {
    /// Replace implausibly clean live readings for known polluted cities
    pub enable_override: bool,
    /// Synthesize a reading when the live provider fails
    pub enable_synthetic_fallback: bool,
    /// How long snapshots stay cached
    pub cache_ttl: Duration,
    /// Maximum number of cached snapshots
    pub cache_capacity: u64,
}

impl Default for AirQualityOptions {
    fn default() -> Self {
        Self {
            enable_override: true,
            enable_synthetic_fallback: true,
            cache_ttl: Duration::from_secs(15 * 60),
            cache_capacity: 1024,
        }
    }
}

/// Orchestrates geocoding, the live provider, the synthetic generator, and
/// the AQI computation into dashboard snapshots
pub struct AirQualityService {
    air_quality: Arc<dyn AirQualityPort>,
    geocoding: Arc<dyn GeocodingPort>,
    clock: Arc<dyn HourClock>,
    options: AirQualityOptions,
    cache: Cache<(i64, i64), AirQualitySnapshot>,
}

impl std::fmt::Debug for AirQualityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirQualityService")
            .field("options", &self.options)
            .field("cached_entries", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}

impl AirQualityService {
    /// Create a service backed by the system clock
    #[must_use]
    pub fn new(
        air_quality: Arc<dyn AirQualityPort>,
        geocoding: Arc<dyn GeocodingPort>,
        options: AirQualityOptions,
    ) -> Self {
        Self::with_clock(air_quality, geocoding, options, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock (for deterministic tests)
    #[must_use]
    pub fn with_clock(
        air_quality: Arc<dyn AirQualityPort>,
        geocoding: Arc<dyn GeocodingPort>,
        options: AirQualityOptions,
        clock: Arc<dyn HourClock>,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(options.cache_capacity)
            .time_to_live(options.cache_ttl)
            .build();
        Self {
            air_quality,
            geocoding,
            clock,
            options,
            cache,
        }
    }

    /// Assemble (or serve from cache) the air quality snapshot for a location
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn snapshot(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQualitySnapshot, ApplicationError> {
        let key = location_cache_key(location);
        if let Some(hit) = self.cache.get(&key).await {
            debug!("serving air quality snapshot from cache");
            return Ok(hit);
        }

        let name = self.resolve_name(location).await;
        let (reading, source) = self.resolve_reading(location, &name).await?;
        let snapshot =
            AirQualitySnapshot::from_reading(reading, *location, name, source, Utc::now());

        info!(
            aqi = snapshot.result.overall.value(),
            dominant = %snapshot.result.dominant,
            source = %snapshot.source,
            location = %snapshot.location_name,
            "assembled air quality snapshot"
        );

        self.cache.insert(key, snapshot.clone()).await;
        Ok(snapshot)
    }

    /// Health advice for a snapshot's category
    #[must_use]
    pub fn advice(snapshot: &AirQualitySnapshot) -> HealthAdvice {
        HealthAdvice::for_level(snapshot.category().level)
    }

    /// Whether the live provider currently responds
    pub async fn is_healthy(&self) -> bool {
        self.air_quality.is_available().await
    }

    /// Resolve a display name, degrading to a placeholder on failure
    async fn resolve_name(&self, location: &GeoLocation) -> String {
        match self.geocoding.reverse_geocode(location).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_LOCATION.to_string(),
            Err(e) => {
                warn!(error = %e, "reverse geocoding failed");
                UNKNOWN_LOCATION.to_string()
            },
        }
    }

    /// Fetch live concentrations, applying the override and fallback policies
    async fn resolve_reading(
        &self,
        location: &GeoLocation,
        name: &str,
    ) -> Result<(PollutantReading, DataSource), ApplicationError> {
        match self.air_quality.fetch_reading(location).await {
            Ok(live) => {
                if self.options.enable_override && should_override(name, &live) {
                    info!(location = name, "replacing implausibly clean live reading");
                    let synthetic = synthesize(location, name, self.clock.as_ref());
                    Ok((synthetic, DataSource::RealisticOverride))
                } else {
                    Ok((live, DataSource::Live))
                }
            },
            Err(e) if self.options.enable_synthetic_fallback => {
                warn!(error = %e, "air quality provider failed, synthesizing reading");
                let synthetic = synthesize(location, name, self.clock.as_ref());
                Ok((synthetic, DataSource::Simulated))
            },
            Err(e) => Err(e),
        }
    }
}
