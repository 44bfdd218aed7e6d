//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use cookbook_core::{ErrorResponse, FieldError, Recipe, RecipeId, RecipeSource};
use cookbook_service::{ComponentStatus, HealthReport, RecipeListResponse, RecipeRequest};
use utoipa::OpenApi;

/// OpenAPI documentation for the Cookbook API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook API",
        version = "1.0.0",
        description = "Recipe catalog with title search merged with TheMealDB results",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Recipe endpoints
        crate::controllers::recipe_controller::list_recipes,
        crate::controllers::recipe_controller::search_recipes,
        crate::controllers::recipe_controller::get_recipe,
        crate::controllers::recipe_controller::create_recipe,
        crate::controllers::recipe_controller::update_recipe,
        crate::controllers::recipe_controller::delete_recipe,
        // Health endpoints
        crate::controllers::health_controller::ping,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Recipe,
            RecipeId,
            RecipeSource,
            RecipeRequest,
            RecipeListResponse,
            ErrorResponse,
            FieldError,
            HealthResponse,
            ReadinessResponse,
            HealthReport,
            ComponentStatus,
        )
    ),
    tags(
        (name = "recipes", description = "Recipe catalog and search"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_recipe_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/recipes".to_string()));
        assert!(paths.contains(&"/recipes/search".to_string()));
        assert!(paths.contains(&"/recipes/{id}".to_string()));
    }
}
