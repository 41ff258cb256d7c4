//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the LAVS tracing/logging system.
///
/// Reads `LAVS_LOG` for per-crate log levels.
/// Format: `LAVS_LOG=lavs_fusion=debug,lavs_core=warn`
///
/// Falls back to `lavs=info` if `LAVS_LOG` is not set or is invalid.
/// Output goes to stderr so stdout stays free for JSON results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string, e.g. from a CLI flag.
/// An invalid filter falls back to the default. Idempotent like [`init_tracing`].
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Another global subscriber already installed is reported on stderr and
/// left in place.
fn install(filter: EnvFilter) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
    if let Err(e) = result {
        eprintln!("lavs: tracing subscriber not installed: {e}");
    }
}
