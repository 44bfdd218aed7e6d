//! Validated JSON extractor.
//!
//! `ValidatedJson<T>` deserializes the body and runs `validator` rules on it.
//! Malformed bodies and rule violations are both answered with
//! 422 Unprocessable Entity in the standard error envelope.

use crate::responses::unprocessable;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use cookbook_core::field_errors;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
///
/// ```ignore
/// async fn create_recipe(ValidatedJson(request): ValidatedJson<RecipeRequest>) {
///     // request.title is not blank here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Body is not JSON, has the wrong content type, or does not fit `T`.
    JsonError(JsonRejection),
    /// Body parsed but broke a validation rule.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                unprocessable(format!("Invalid request body: {}", rejection.body_text()), None)
            }
            Self::ValidationError(errors) => {
                unprocessable("Request validation failed", Some(field_errors(&errors)))
            }
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use cookbook_core::rules::not_blank;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Titled {
        #[validate(custom(function = "not_blank", message = "Title must not be blank"))]
        title: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ValidatedJson(value) = ValidatedJson::<Titled>::from_request(json_request(r#"{"title":"Soup"}"#), &())
            .await
            .unwrap();
        assert_eq!(value.title, "Soup");
    }

    #[tokio::test]
    async fn test_blank_title_is_unprocessable() {
        let rejection = ValidatedJson::<Titled>::from_request(json_request(r#"{"title":"  "}"#), &())
            .await
            .unwrap_err();

        assert!(matches!(rejection, ValidatedJsonRejection::ValidationError(_)));
        assert_eq!(rejection.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_body_is_unprocessable() {
        let rejection = ValidatedJson::<Titled>::from_request(json_request("{"), &())
            .await
            .unwrap_err();

        assert!(matches!(rejection, ValidatedJsonRejection::JsonError(_)));
        assert_eq!(rejection.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
