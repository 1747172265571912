//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Air quality API (v1)
        .route("/v1/air-quality", get(handlers::air_quality::get_snapshot))
        // Weather API (v1)
        .route("/v1/weather", get(handlers::weather::get_current))
        .route("/v1/weather/forecast", get(handlers::weather::get_forecast))
        // Location API (v1)
        .route("/v1/locations/search", get(handlers::locations::search))
        .route("/v1/locations/reverse", get(handlers::locations::reverse))
        // Attach state
        .with_state(state)
}
