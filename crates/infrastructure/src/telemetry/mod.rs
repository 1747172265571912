//! Telemetry initialization
//!
//! Structured, leveled logging via tracing-subscriber. The filter and output
//! format come from configuration; `RUST_LOG` wins when set.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Default filter directives when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON log lines instead of human-readable text
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info,airwatch_server=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Build from the server's log format string ("json" or "text")
    #[must_use]
    pub fn from_log_format(log_format: &str) -> Self {
        Self {
            json: log_format.eq_ignore_ascii_case("json"),
            ..Self::default()
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.clone()));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| e.to_string())
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| e.to_string())
    }
}
