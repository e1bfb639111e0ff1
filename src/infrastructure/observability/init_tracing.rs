use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber. `RUST_LOG` overrides the configured directives.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &TracingConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directives));

    let installed = if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::info!(
            environment = %config.environment,
            json_format = config.json_format,
            "Extraction workspace initialized"
        );
    }

    installed
}
