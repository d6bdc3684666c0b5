/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Level used when `LOGLEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the filter from a `LOGLEVEL` value, falling back to `default`
///
/// Accepts anything `EnvFilter` does, from a bare level (`debug`) to per-target
/// directives (`degiro_client=trace,reqwest=warn`).
#[must_use]
pub fn log_filter(value: Option<&str>, default: &str) -> EnvFilter {
    value
        .and_then(|v| EnvFilter::try_new(v.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Sets up the global `tracing` subscriber at `INFO` unless `LOGLEVEL` says otherwise
pub fn setup_logger() {
    setup_logger_with_default(DEFAULT_LOG_LEVEL);
}

/// Sets up the global `tracing` subscriber, `default` being the level used when
/// `LOGLEVEL` is unset or invalid
///
/// Calling it more than once is harmless: only the first call installs a subscriber.
pub fn setup_logger_with_default(default: &str) {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL").ok();
        let filter = log_filter(level.as_deref(), default);

        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_err()
        {
            eprintln!("a global tracing subscriber was already set");
        }
    });
}
