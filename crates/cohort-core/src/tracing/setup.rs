//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `COHORT_LOG` environment variable for per-subsystem log
/// levels, e.g. `COHORT_LOG=cohort_engine::policy=debug,cohort_core=info`.
///
/// Falls back to `cohort=info` if `COHORT_LOG` is not set or invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("COHORT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("cohort=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();

        tracing::debug!("tracing initialized");
    });
}
