//! AirWatch HTTP Server
//!
//! Main entry point for the dashboard API server.

use std::{sync::Arc, time::Duration};

use application::ports::GeocodingPort;
use application::{AirQualityService, WeatherService};
use infrastructure::{
    AirQualityAdapter, AppConfig, Environment, GeocodingAdapter, TelemetryConfig, WeatherAdapter,
    init_telemetry,
};
use presentation_http::{routes, set_expose_internal_errors, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before telemetry so the log format honors it;
    // report load failures once the subscriber is installed.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_telemetry(&TelemetryConfig::from_log_format(&config.server.log_format))
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {e}"))?;

    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {e}");
    }

    info!("AirWatch v{} starting...", env!("CARGO_PKG_VERSION"));

    let environment = config.environment();
    set_expose_internal_errors(environment == Environment::Development);

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %environment,
        "Configuration loaded"
    );

    // Initialize provider adapters
    let openweather_config = config
        .openweather
        .to_client_config()
        .map_err(|e| anyhow::anyhow!("OpenWeatherMap configuration invalid: {e}"))?;
    let geocoding_config = config
        .geocoding
        .to_client_config()
        .map_err(|e| anyhow::anyhow!("Geocoding configuration invalid: {e}"))?;

    let air_quality_adapter = AirQualityAdapter::new(openweather_config.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize air quality adapter: {e}"))?;
    let weather_adapter = WeatherAdapter::new(openweather_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather adapter: {e}"))?;
    let geocoding_adapter = GeocodingAdapter::new(geocoding_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding adapter: {e}"))?;

    // Initialize services
    let geocoding: Arc<dyn GeocodingPort> = Arc::new(geocoding_adapter);
    let options = config.air_quality.to_options();
    let cache_ttl = options.cache_ttl;
    let cache_capacity = options.cache_capacity;

    let air_quality_service = AirQualityService::new(
        Arc::new(air_quality_adapter),
        Arc::clone(&geocoding),
        options,
    );
    let weather_service =
        WeatherService::new(Arc::new(weather_adapter), cache_ttl, cache_capacity);

    // Create app state
    let state = AppState {
        air_quality: Arc::new(air_quality_service),
        weather: Arc::new(weather_service),
        geocoding,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!(timeout_secs = timeout.as_secs(), "Shutdown signal received");
}
