//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::{GeocodingPort, LocationMatch};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geocoding::{GeocodingClient, PlaceMatch, TomTomClient, TomTomConfig, TomTomError};
use tracing::{debug, instrument, warn};

/// Adapter for geocoding via the TomTom Search API
pub struct GeocodingAdapter {
    client: TomTomClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"TomTomClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: TomTomConfig) -> Result<Self, ApplicationError> {
        let client =
            TomTomClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: TomTomError) -> ApplicationError {
        match err {
            TomTomError::ConnectionFailed(e)
            | TomTomError::RequestFailed(e)
            | TomTomError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            TomTomError::ParseError(e) => ApplicationError::Internal(e),
            TomTomError::InvalidCoordinates => {
                ApplicationError::InvalidOperation("Invalid coordinates".into())
            },
            TomTomError::InvalidApiKey => {
                ApplicationError::Configuration("TomTom API key rejected".into())
            },
            TomTomError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert a provider match, dropping entries with invalid coordinates
    fn map_match(place: PlaceMatch) -> Option<LocationMatch> {
        match GeoLocation::new(place.latitude, place.longitude) {
            Ok(location) => Some(LocationMatch {
                name: place.name,
                location,
            }),
            Err(_) => {
                warn!(
                    name = %place.name,
                    lat = place.latitude,
                    lon = place.longitude,
                    "dropping search result with invalid coordinates"
                );
                None
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn reverse_geocode(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<String>, ApplicationError> {
        let name = self
            .client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(name = name.as_deref().unwrap_or("<none>"), "reverse geocoded");
        Ok(name)
    }

    #[instrument(skip(self), fields(query = %query, limit))]
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationMatch>, ApplicationError> {
        let matches = self
            .client
            .search(query, limit)
            .await
            .map_err(Self::map_error)?;

        Ok(matches.into_iter().filter_map(Self::map_match).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_matches_convert() {
        let place = PlaceMatch {
            name: "Delhi".to_string(),
            latitude: 28.6139,
            longitude: 77.209,
        };
        let converted = GeocodingAdapter::map_match(place).expect("valid");
        assert_eq!(converted.name, "Delhi");
        assert!((converted.location.latitude() - 28.6139).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_matches_are_dropped() {
        let place = PlaceMatch {
            name: "Nowhere".to_string(),
            latitude: 95.0,
            longitude: 0.0,
        };
        assert!(GeocodingAdapter::map_match(place).is_none());
    }

    #[test]
    fn errors_map_to_application_errors() {
        assert!(matches!(
            GeocodingAdapter::map_error(TomTomError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            GeocodingAdapter::map_error(TomTomError::RequestFailed("x".into())),
            ApplicationError::ExternalService(_)
        ));
    }
}
