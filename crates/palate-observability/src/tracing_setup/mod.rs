pub mod spans;

use palate_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Build the env filter: `RUST_LOG` wins, otherwise the configured level.
fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber. Returns `false` if one is already set.
pub fn try_init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = env_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}

/// Install the global subscriber, ignoring a previously installed one.
pub fn init_tracing(config: &ObservabilityConfig) {
    if !try_init_tracing(config) {
        tracing::debug!("tracing subscriber already installed");
    }
}
