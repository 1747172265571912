//! Geocoding provider port
//!
//! Location names are only used as display strings and as the key for the
//! polluted-city lookup; there is no other semantic dependency.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A location candidate returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMatch {
    /// Human-readable name ("Delhi, India")
    pub name: String,
    /// Coordinates of the match
    pub location: GeoLocation,
}

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve coordinates to a human-readable place name
    ///
    /// Returns `None` when the provider has no name for the coordinates.
    async fn reverse_geocode(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<String>, ApplicationError>;

    /// Search for locations matching a free-form query
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationMatch>, ApplicationError>;
}
