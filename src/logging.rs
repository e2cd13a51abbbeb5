//! Tracing initialization
//!
//! Log lines go to stderr so reports written to stdout stay machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target log levels
pub const LOG_ENV: &str = "CADENCE_LOG";

static INIT: Once = Once::new();

/// The filter used when `CADENCE_LOG` is unset or invalid
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "cadence=debug"
    } else {
        "cadence=warn"
    }
}

/// Initialize logging for the binary
///
/// Reads `CADENCE_LOG` (e.g. `CADENCE_LOG=cadence::services=debug`), falling
/// back to [`default_directive`]. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
