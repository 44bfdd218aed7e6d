//! Logging and metrics setup.

use cookbook_config::ObservabilityConfig;
use cookbook_core::{CookbookError, CookbookResult};
use cookbook_service::metrics::register_metrics;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

fn default_directives(level: &str) -> String {
    format!("{level},cookbook=debug,tower_http=debug")
}

/// Installs the global Prometheus recorder and describes the service metrics.
pub fn install_metrics_recorder() -> CookbookResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        CookbookError::Configuration(format!("Failed to install metrics recorder: {}", e))
    })?;

    register_metrics();
    Ok(handle)
}
