//! API response types.

use cookbook_core::{CookbookError, ErrorResponse, FieldError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Creates an error response.
    pub fn error(error: ErrorResponse) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub CookbookError);

impl From<CookbookError> for AppError {
    fn from(err: CookbookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let error_response = ErrorResponse::from_error(&self.0);
        error_body(status, error_response)
    }
}

/// Renders an error envelope with the given status.
pub fn error_body(status: StatusCode, error: ErrorResponse) -> Response {
    (status, Json(ApiResponse::error(error))).into_response()
}

/// Renders a 422 envelope for a request body that failed validation.
pub fn unprocessable(message: impl Into<String>, details: Option<Vec<FieldError>>) -> Response {
    let error = ErrorResponse {
        code: "VALIDATION_ERROR".to_string(),
        message: message.into(),
        details,
        trace_id: None,
    };
    error_body(StatusCode::UNPROCESSABLE_ENTITY, error)
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error() {
        let body = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(body, serde_json::json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn test_app_error_status_follows_error_kind() {
        let not_found = AppError(CookbookError::not_found("Recipe", 7)).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError(CookbookError::validation("title: blank")).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let database = AppError(CookbookError::Database("locked".to_string())).into_response();
        assert_eq!(database.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
