//! Location search and reverse geocoding handlers

use axum::{Json, extract::{Query, State}};
use application::ports::LocationMatch;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

use super::{CoordsQuery, resolve_location};

/// Query parameters for location search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-form search text
    pub q: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<LocationMatch>,
}

/// Reverse geocode response
#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    /// Display name, when the provider knows one
    pub name: Option<String>,
}

/// GET /v1/locations/search?q=..
#[instrument(skip(state, query), fields(q = %query.q))]
pub async fn search(
    State(state): State<AppState>,
    query: Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(ApiError::BadRequest(
            "q query parameter must not be empty".to_string(),
        ));
    }

    let limit = state.config.geocoding.search_limit;
    let results = state.geocoding.search(q, limit).await?;

    Ok(Json(SearchResponse { results }))
}

/// GET /v1/locations/reverse?latitude=..&longitude=..
#[instrument(skip(state, query))]
pub async fn reverse(
    State(state): State<AppState>,
    query: Query<CoordsQuery>,
) -> Result<Json<ReverseResponse>, ApiError> {
    let location = resolve_location(&state, query)?;
    let name = state.geocoding.reverse_geocode(&location).await?;

    Ok(Json(ReverseResponse { name }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value_objects::GeoLocation;

    #[test]
    fn search_response_serialization() {
        let response = SearchResponse {
            results: vec![LocationMatch {
                name: "Delhi".to_string(),
                location: GeoLocation::delhi(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["results"][0]["name"], "Delhi");
    }

    #[test]
    fn reverse_response_with_no_name() {
        let response = ReverseResponse { name: None };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("null"));
    }
}
