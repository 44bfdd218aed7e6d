//! # Cookbook Server
//!
//! Entry point for the Cookbook REST service.

use cookbook_config::{AppConfig, ConfigLoader};
use cookbook_core::CookbookResult;
use cookbook_server::{app, startup, telemetry};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    telemetry::init_logging(&config.observability);

    startup::print_banner();
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> CookbookResult<()> {
    let metrics = if config.observability.metrics_enabled {
        Some(telemetry::install_metrics_recorder()?)
    } else {
        None
    };

    let router = app::build_router(&config, metrics).await?;

    startup::print_startup_info(&config);
    app::serve(&config, router).await
}
