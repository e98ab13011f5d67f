//! Structured logging initialization.
//!
//! Console output with an `EnvFilter` driven by `RUST_LOG`; set
//! `PRESSROOM_LOG_FORMAT=json` for machine-readable output.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the global tracing subscriber once.
///
/// Safe to call repeatedly; later calls are no-ops. If another subscriber is
/// already installed (e.g. by a test harness) the existing one is kept.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let json_output = std::env::var("PRESSROOM_LOG_FORMAT")
            .map(|v| v == "json")
            .unwrap_or(false);

        let result = if json_output {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .try_init()
        };

        if result.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}
