//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use cookbook_core::CookbookError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `COOKBOOK__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, CookbookError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, CookbookError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), CookbookError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, CookbookError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("COOKBOOK_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        // COOKBOOK__REDIS__ENABLED=false -> redis.enabled
        builder = builder.add_source(
            Environment::with_prefix("COOKBOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_cookbook_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_cookbook_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, reporting every problem at once.
    fn validate_config(config: &AppConfig) -> Result<(), CookbookError> {
        ConfigValidator::validate(config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            CookbookError::Configuration(message)
        })
    }
}

fn config_error_to_cookbook_error(err: ConfigError) -> CookbookError {
    CookbookError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RepositoryBackend, ServerConfig};
    use std::fs;

    #[tokio::test]
    async fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.repository.backend, RepositoryBackend::Memory);
        assert_eq!(config.mealdb.timeout_secs, 10);
        assert_eq!(config.mealdb.cache_ttl_secs, 86_400);
    }

    #[tokio::test]
    async fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_loads_partial_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
            [server]
            port = 9000

            [repository]
            backend = "sqlite"

            [mealdb]
            cache_ttl_secs = 60
            "#,
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.repository.backend, RepositoryBackend::Sqlite);
        assert_eq!(config.mealdb.cache_ttl_secs, 60);
        assert_eq!(config.mealdb.timeout_secs, 10);
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
            [mealdb]
            timeout_secs = 0
            "#,
        )
        .unwrap();

        let err = ConfigLoader::new(dir.path().to_string_lossy())
            .err()
            .expect("zero timeout must be rejected");
        assert!(matches!(err, CookbookError::Configuration(_)));
        assert!(err.to_string().contains("mealdb.timeout_secs"));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        fs::write(&path, "[server]\nport = 9100\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().await.server.port, 9100);

        fs::write(&path, "[server]\nport = 9200\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.server.port, 9200);
    }
}
