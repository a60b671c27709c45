//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the lintmask tracing/logging system.
///
/// Reads the `LINTMASK_LOG` environment variable for filter directives.
/// Format: `LINTMASK_LOG=lintmask_enforcement=debug,lintmask_core=info`
///
/// Falls back to `warn` if `LINTMASK_LOG` is not set or is invalid. Logs go
/// to stderr so they never interleave with the report on stdout.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        // A test harness or embedding host may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
