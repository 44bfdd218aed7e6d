//! Configuration validation module.
//!
//! Fails fast on invalid configuration rather than at runtime. All problems
//! are collected so a single startup attempt reports every one of them.

use crate::{AppConfig, RepositoryBackend};
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or TTL value must be positive.
    NonPositiveTimeout { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
    /// Metrics path must be absolute.
    InvalidMetricsPath { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name } => {
                write!(f, "'{}' must be positive", name)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{}' (valid: pretty, json)", value)
            }
            Self::InvalidMetricsPath { value } => {
                write!(f, "Metrics path must start with '/': '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(config, &mut errors);
        if config.repository.backend == RepositoryBackend::Sqlite {
            Self::validate_database(config, &mut errors);
        }
        Self::validate_redis(config, &mut errors);
        Self::validate_mealdb(config, &mut errors);
        Self::validate_observability(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            });
        }
        if config.server.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
            });
        }
    }

    fn validate_database(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let database = &config.database;

        if database.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !database.url.starts_with("sqlite:") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with sqlite:".to_string(),
            });
        }

        if database.min_connections > database.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: database.min_connections,
                max: database.max_connections,
            });
        }
        if database.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_redis(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.redis.enabled {
            return;
        }

        match Url::parse(&config.redis.url) {
            Ok(url) if url.scheme() == "redis" || url.scheme() == "rediss" => {}
            Ok(_) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn validate_mealdb(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let mealdb = &config.mealdb;

        match Url::parse(&mealdb.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(_) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "mealdb".to_string(),
                message: "URL must use http or https".to_string(),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "mealdb".to_string(),
                message: e.to_string(),
            }),
        }

        if mealdb.timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "mealdb.timeout_secs".to_string(),
            });
        }
        if mealdb.cache_ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "mealdb.cache_ttl_secs".to_string(),
            });
        }
    }

    fn validate_observability(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let observability = &config.observability;

        if !Self::VALID_LOG_LEVELS.contains(&observability.log_level.to_lowercase().as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: observability.log_level.clone(),
            });
        }
        if !Self::VALID_LOG_FORMATS.contains(&observability.log_format.to_lowercase().as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: observability.log_format.clone(),
            });
        }
        if observability.metrics_enabled && !observability.metrics_path.starts_with('/') {
            errors.push(ConfigValidationError::InvalidMetricsPath {
                value: observability.metrics_path.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ConfigValidator::validate(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_database_only_checked_for_sqlite_backend() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/db".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());

        config.repository.backend = RepositoryBackend::Sqlite;
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            &errors[0],
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        ));
    }

    #[test]
    fn test_redis_url_skipped_when_disabled() {
        let mut config = AppConfig::default();
        config.redis.url = "http://not-redis".to_string();
        assert!(ConfigValidator::validate(&config).is_err());

        config.redis.enabled = false;
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.mealdb.base_url = "not a url".to_string();
        config.mealdb.cache_ttl_secs = 0;
        config.observability.log_level = "loud".to_string();
        config.observability.log_format = "xml".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ConfigValidationError::NonPositiveTimeout {
            name: "mealdb.cache_ttl_secs".to_string(),
        }));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigValidationError::InvalidPoolSize { min: 10, max: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid pool size: min (10) cannot be greater than max (2)"
        );
    }
}
