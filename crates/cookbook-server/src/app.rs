//! Application assembly and the HTTP server loop.

use crate::di::{build_in_memory_module, build_sqlite_module};
use axum::{routing::get, Router};
use cookbook_config::{AppConfig, RepositoryBackend};
use cookbook_core::{CookbookError, CookbookResult};
use cookbook_rest::{create_router, AppState};
use metrics_exporter_prometheus::PrometheusHandle;
use std::future::ready;
use tokio::signal;
use tracing::{error, info};

/// Builds the full router for the configured backend.
///
/// When a Prometheus handle is given, its scrape output is served at
/// `observability.metrics_path`.
pub async fn build_router(
    config: &AppConfig,
    metrics: Option<PrometheusHandle>,
) -> CookbookResult<Router> {
    info!("Recipe storage backend: {}", config.repository.backend);

    let state = match config.repository.backend {
        RepositoryBackend::Memory => AppState::from_module(&*build_in_memory_module(config).await?),
        RepositoryBackend::Sqlite => AppState::from_module(&*build_sqlite_module(config).await?),
    };

    let router = create_router(state, &config.server);

    Ok(match metrics {
        Some(handle) => router.route(
            &config.observability.metrics_path,
            get(move || ready(handle.render())),
        ),
        None => router,
    })
}

/// Binds the configured address and serves until a shutdown signal arrives.
pub async fn serve(config: &AppConfig, router: Router) -> CookbookResult<()> {
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CookbookError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CookbookError::internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config
    }

    async fn get_status(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_in_memory_router_lists_seed_recipes() {
        let router = build_router(&test_config(), None).await.unwrap();

        let (status, body) = get_status(router, "/api/v1/recipes").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["recipes"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_metrics_route_is_served_with_handle() {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let router = build_router(&test_config(), Some(handle)).await.unwrap();

        let (status, _) = get_status(router, "/metrics").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_route_absent_without_handle() {
        let router = build_router(&test_config(), None).await.unwrap();

        let (status, _) = get_status(router, "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
