//! Server startup output.

use cookbook_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______            __   __                __
  / ____/___  ____  / /__/ /_  ____  ____  / /__
 / /   / __ \/ __ \/ //_/ __ \/ __ \/ __ \/ //_/
/ /___/ /_/ / /_/ / ,< / /_/ / /_/ / /_/ / ,<
\____/\____/\____/_/|_/_.___/\____/\____/_/|_|

                 Recipe Service
    "#);
}

/// Prints where the server can be reached.
pub fn print_startup_info(config: &AppConfig) {
    let port = config.server.port;
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}/api/v1/recipes", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    if config.observability.metrics_enabled {
        info!(
            "Metrics:   http://0.0.0.0:{}{}",
            port, config.observability.metrics_path
        );
    }
    info!("Storage:   {}", config.repository.backend);
    info!(
        "Cache:     {}",
        if config.redis.enabled { config.redis.url.as_str() } else { "disabled" }
    );
    info!("{}", separator);
}
