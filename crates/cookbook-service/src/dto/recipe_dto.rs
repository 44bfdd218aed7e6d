//! Recipe DTOs.

use cookbook_core::rules::not_blank;
use cookbook_core::{Recipe, RecipeDraft};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for creating or replacing a recipe.
///
/// Every field is required; update replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[validate(custom(function = "not_blank", message = "Title must not be blank"))]
    #[schema(example = "Spaghetti Carbonara")]
    pub title: String,

    pub ingredients: Vec<String>,

    pub steps: Vec<String>,

    #[schema(example = "10 minutes")]
    pub prep_time: String,

    #[schema(example = "15 minutes")]
    pub cook_time: String,

    #[schema(example = "Easy")]
    pub difficulty: String,

    #[schema(example = "Italian")]
    pub cuisine: String,
}

impl From<RecipeRequest> for RecipeDraft {
    fn from(request: RecipeRequest) -> Self {
        Self {
            title: request.title,
            ingredients: request.ingredients,
            steps: request.steps,
            prep_time: request.prep_time,
            cook_time: request.cook_time,
            difficulty: request.difficulty,
            cuisine: request.cuisine,
        }
    }
}

/// A list of recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

impl From<Vec<Recipe>> for RecipeListResponse {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

/// Query string for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Title fragment to search for. Missing or blank returns no results.
    pub q: Option<String>,
}
