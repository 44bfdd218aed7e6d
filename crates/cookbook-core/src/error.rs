//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of the Cookbook service.
///
/// `ExternalService` and `Cache` are raised inside the external search layer
/// and are always recovered there; they never reach an HTTP caller through
/// the search path.
#[derive(Error, Debug)]
pub enum CookbookError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CookbookError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Timeout(_) => 503,
            Self::ExternalService { .. } => 502,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an external service error.
    #[must_use]
    pub fn external<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CookbookError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::PoolTimedOut => Self::Timeout("database pool acquire".to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CookbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `CookbookError`.
    #[must_use]
    pub fn from_error(error: &CookbookError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&CookbookError> for ErrorResponse {
    fn from(error: &CookbookError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(CookbookError::not_found("Recipe", 1).status_code(), 404);
        assert_eq!(CookbookError::validation("title is blank").status_code(), 400);
        assert_eq!(CookbookError::external("mealdb", "boom").status_code(), 502);
        assert_eq!(CookbookError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(CookbookError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(CookbookError::Timeout("timed out".to_string()).status_code(), 503);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CookbookError::not_found("Recipe", 1).error_code(), "NOT_FOUND");
        assert_eq!(CookbookError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(CookbookError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(
            CookbookError::external("mealdb", "x").error_code(),
            "EXTERNAL_SERVICE_ERROR"
        );
        assert_eq!(CookbookError::Cache("c".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(CookbookError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = CookbookError::not_found("Recipe", 42);
        assert_eq!(not_found.to_string(), "Resource not found: Recipe with id 42");

        let external = CookbookError::external("mealdb", "connection refused");
        assert!(external.to_string().contains("mealdb"));
        assert!(external.to_string().contains("connection refused"));

        let internal = CookbookError::internal("panic");
        assert!(internal.to_string().contains("panic"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let converted = CookbookError::from(err);
        assert!(matches!(converted, CookbookError::Internal(_)));
        assert_eq!(converted.error_code(), "INTERNAL_ERROR");
        assert!(converted.to_string().starts_with("Internal error: JSON serialization error"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = CookbookError::not_found("Recipe", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_error_response_with_trace_id() {
        let err = CookbookError::not_found("Recipe", 1);
        let response = ErrorResponse::from_error(&err).with_trace_id("trace-123");
        assert_eq!(response.trace_id, Some("trace-123".to_string()));
    }

    #[test]
    fn test_error_response_with_details() {
        let err = CookbookError::validation("bad input");
        let details = vec![FieldError {
            field: "title".to_string(),
            message: "Title must not be blank".to_string(),
            code: "not_blank".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
