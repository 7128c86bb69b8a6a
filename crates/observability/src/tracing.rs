//! Tracing/logging initialization.
//!
//! A host embedding the machine gets JSON logs of catalog changes,
//! resupplies, and purchase outcomes emitted by `brewvend-machine`.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with the `info` default level.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default("info");
}

/// Initialize tracing with a caller-chosen default directive.
///
/// `RUST_LOG` still wins when set; the directive only fills the gap when
/// the environment says nothing.
pub fn init_with_default(directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive.to_owned()));

    // JSON output with timestamps; event fields carry the machine state.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
