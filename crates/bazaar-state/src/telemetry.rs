//! # Telemetry Bootstrap
//!
//! Tracing-subscriber registration for host binaries.
//!
//! The engine and the handle emit structured `tracing` events; whether and
//! where those events land is up to the embedding app. Hosts that want the
//! default formatting call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bazaar_state=trace` - Trace the cart façade only
/// - Default: INFO level, cart crates at DEBUG
///
/// Calling this more than once (or alongside a subscriber the host already
/// installed) fails quietly rather than panicking.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bazaar_core=debug,bazaar_state=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init(); // second call must not panic
    }
}
