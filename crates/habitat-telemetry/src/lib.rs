//! # Habitat Telemetry
//!
//! Structured logging initialization for Habitat services.
//!
//! Every process (and the integration test harness) funnels through
//! [`init_telemetry`], so log shape and filtering are configured in exactly
//! one place.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use habitat_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(&config).expect("Failed to init telemetry");
//!
//!     // Your application code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HB_SERVICE_NAME` | `habitat` | Service name stamped on log lines |
//! | `HB_LOG_LEVEL` | `info` | Log level filter |
//! | `HB_CONSOLE_OUTPUT` | `true` | Emit human-readable console logs |
//! | `HB_JSON_LOGS` | `false` (dev) | Emit JSON logs (auto-on in containers) |

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize log subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Guard that keeps telemetry active for the lifetime of the process.
pub struct TelemetryGuard {
    _private: (),
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!("Shutting down telemetry...");
    }
}

/// Initialize structured logging.
///
/// Returns a guard that should be held for the lifetime of the application.
/// Calling this a second time in the same process fails, because the global
/// subscriber can only be installed once.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))?;

    if config.json_logs {
        // JSON output for containers/production
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        if config.console_output {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .try_init()
                .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
        }
    } else {
        // Pretty output for development
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        if config.console_output {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;
        }
    }

    tracing::info!(service = %config.service_name, "telemetry initialized");

    Ok(TelemetryGuard { _private: () })
}
