//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR};
use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize logging with default settings.
///
/// Reads the `SCORING_LOG` environment variable for filter directives,
/// e.g. `SCORING_LOG=scoring_engine=debug,scoring_policy=warn`.
/// Falls back to `info` when unset or invalid.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize logging from an [`ObservabilityConfig`].
///
/// `SCORING_LOG` still takes precedence over `config.log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        // Another subscriber may already be installed by the host application.
        if let Err(e) = result {
            tracing::debug!("tracing subscriber not installed: {e}");
        }
    });
}
