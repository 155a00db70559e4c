//! Logging infrastructure for Tempo.
//!
//! Centralized tracing setup shared by the CLI and any future frontends.
//! Session transitions are logged at debug, safety interventions
//! (truncation, forced sets) at warn.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with the default level (info).
///
/// `RUST_LOG` overrides the default when set.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level.
///
/// Uses a compact fmt layer; filtering still honors the `RUST_LOG`
/// environment variable over `default_level`.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
