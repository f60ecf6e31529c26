//! Logging bootstrap
//!
//! Installs the global tracing subscriber when the Logging feature is
//! enabled during mount. Request-level tracing is attached separately to the
//! mounted router via `tower-http`.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// Filter comes from `RUST_LOG`, falling back to `info`. Idempotent: if a
/// subscriber is already installed it is left in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
