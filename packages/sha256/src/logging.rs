//! Logging setup for the `sha256` binary
//!
//! Library code emits `tracing` events; with the `log` feature enabled they
//! are forwarded to the `log` facade and printed by `env_logger`.
//! Configure levels via `RUST_LOG`, e.g. `RUST_LOG=cryypt_sha256=debug`.

use log::info;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize logging once at application startup
pub fn init() {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .init();

        info!("Structured logging initialized");
    });
}

/// Initialize logging for test environments
///
/// Safe to call from many tests; later calls are ignored.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
