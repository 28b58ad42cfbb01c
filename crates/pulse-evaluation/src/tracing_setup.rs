//! Tracing initialization.

use std::sync::Once;

use pulse_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g.
/// `PULSE_LOG=pulse_selection=debug,pulse_grouping=info`.
pub const LOG_ENV: &str = "PULSE_LOG";

/// Initialize the Pulse tracing/logging system.
///
/// `PULSE_LOG` wins over `config.log_level`. Idempotent; a subscriber that is
/// already installed is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json_logs {
            let _ = registry
                .with(fmt::layer().json().with_target(true).with_current_span(false))
                .try_init();
        } else {
            let _ = registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_line_number(true),
                )
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = ObservabilityConfig::default();
        init_tracing(&config);
        init_tracing(&config);
        tracing::info!("tracing initialized twice without panicking");
    }
}
