//! # Habitat Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem flows
//!     ├── flows.rs      # Credential resolution through the full space and
//!     │                 # profile lifecycle
//!     └── atomicity.rs  # Clone rollback and cascade-delete guarantees
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p habitat-tests
//!
//! # By category
//! cargo test -p habitat-tests integration::flows
//! cargo test -p habitat-tests integration::atomicity
//! ```
//!
//! Set `RUST_LOG=debug` to watch the service logs while a flow runs.

use std::sync::Once;

use habitat_telemetry::{init_telemetry, TelemetryConfig};


static INIT: Once = Once::new();

/// Installs the tracing subscriber for the test process. The global
/// subscriber can only be set once, so every test may call this freely.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let config = TelemetryConfig {
            service_name: "habitat-tests".to_string(),
            ..TelemetryConfig::from_env()
        };
        if let Ok(guard) = init_telemetry(&config) {
            // The subscriber must outlive every test in the process.
            std::mem::forget(guard);
        }
    });
}
