use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::presentation::config::Environment;

use super::TracingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the default filter depends on the
/// environment, keeping production at info while development gets
/// crate-level debug output.
pub fn init_tracing(config: TracingConfig, port: u16) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.environment)));

    let fmt_layer = if config.json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!(
        port,
        environment = %config.environment,
        json_format = config.json_format,
        "Server initialized"
    );
}

fn default_filter(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "info,quillon=info",
        _ => "info,quillon=debug,tower_http=debug",
    }
}
