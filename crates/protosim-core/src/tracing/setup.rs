//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the protosim tracing/logging system.
///
/// Reads the `PROTOSIM_LOG` environment variable for per-module log levels.
/// Format: `PROTOSIM_LOG=protosim_engine=debug,protosim_core=warn`
///
/// Falls back to `protosim=info` if `PROTOSIM_LOG` is not set or is invalid.
/// Output goes to stderr so stdout can carry JSON results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    install(EnvFilter::new(DEFAULT_LOG_FILTER));
}

/// Like [`init_tracing`], but the fallback filter is `protosim=<level>`.
/// `PROTOSIM_LOG` still wins when it is set and valid.
pub fn init_tracing_with_level(level: &str) {
    install(EnvFilter::new(format!("protosim={level}")));
}

fn install(fallback: EnvFilter) {
    INIT.call_once(|| {
        let filter = select_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), fallback);

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        if let Err(e) = installed {
            ::tracing::debug!(error = %e, "global subscriber already set, keeping it");
        }
    });
}

/// `directives` when they parse as a filter, otherwise `fallback`.
fn select_filter(directives: Option<&str>, fallback: EnvFilter) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or(fallback)
}
