// SPDX-License-Identifier: MIT
//! Logging bootstrap.
//!
//! The host calls [`init_logging`] once at startup; library code only emits
//! `tracing` events and never installs a subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string (e.g. `"info"`,
/// `"info,questline_core=debug"`); `format` is `"pretty"` or `"json"`.
/// Calling this twice is harmless — the second call is a no-op.
pub fn init_logging(filter: &str, format: &str) {
    let use_json = format == "json";
    if use_json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::new(filter))
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .compact()
            .try_init();
    }
}
